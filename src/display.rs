//! # Display Module
//!
//! Section formatting and the joined status line. Whether ANSI colors are
//! emitted is decided by the caller and passed in; nothing here consults the
//! terminal or the environment.

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

use crate::gauge::{GaugeRender, Tier};

pub const DEFAULT_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentColor {
    Green,
    Yellow,
    Red,
    Cyan,
    Magenta,
}

impl From<Tier> for SegmentColor {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Normal => SegmentColor::Green,
            Tier::Warning => SegmentColor::Yellow,
            Tier::Critical => SegmentColor::Red,
        }
    }
}

#[cfg(feature = "colors")]
fn paint(text: &str, color: SegmentColor) -> String {
    match color {
        SegmentColor::Green => text.green().to_string(),
        SegmentColor::Yellow => text.yellow().to_string(),
        SegmentColor::Red => text.red().to_string(),
        SegmentColor::Cyan => text.cyan().to_string(),
        SegmentColor::Magenta => text.magenta().to_string(),
    }
}

// Built without the colors feature every segment is plain text
#[cfg(not(feature = "colors"))]
fn paint(text: &str, _color: SegmentColor) -> String {
    text.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub icon: String,
    pub content: String,
    pub color: Option<SegmentColor>,
}

impl Section {
    pub fn new(icon: &str, content: impl Into<String>, color: Option<SegmentColor>) -> Self {
        Self {
            icon: icon.to_string(),
            content: content.into(),
            color,
        }
    }

    pub fn render(&self, colors: bool) -> String {
        let text = if self.icon.is_empty() {
            self.content.clone()
        } else {
            format!("{} {}", self.icon, self.content)
        };
        match self.color {
            Some(color) if colors => paint(&text, color),
            _ => text,
        }
    }
}

impl From<&GaugeRender> for Section {
    fn from(gauge: &GaugeRender) -> Self {
        Section::new(
            gauge.icon(),
            gauge.text.clone(),
            Some(SegmentColor::from(gauge.tier)),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub separator: String,
    pub sections: Vec<Section>,
}

impl StatusLine {
    pub fn render(&self, colors: bool) -> String {
        let separator = if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            self.separator.as_str()
        };
        self.sections
            .iter()
            .map(|section| section.render(colors))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
