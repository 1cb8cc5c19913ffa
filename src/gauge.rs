//! # Gauge Module
//!
//! Turns a [`ContextState`] into the context segment: a ten cell block gauge,
//! abbreviated token counts, the rounded percentage and a severity tier.

use crate::models::ContextState;

pub const GAUGE_CELLS: usize = 10;

const FILLED_CELL: char = '⛁';
const PARTIAL_CELL: char = '⛀';
const EMPTY_CELL: char = '⛶';

const WARNING_PERCENT: f64 = 60.0;
const CRITICAL_PERCENT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Warning,
    Critical,
}

impl Tier {
    pub fn from_percentage(pct: f64) -> Self {
        if pct < WARNING_PERCENT {
            Tier::Normal
        } else if pct < CRITICAL_PERCENT {
            Tier::Warning
        } else {
            Tier::Critical
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeRender {
    pub percentage: f64,
    pub filled: usize,
    pub partial: bool,
    pub empty: usize,
    pub tier: Tier,
    pub text: String,
}

impl GaugeRender {
    /// The context segment carries no icon.
    pub fn icon(&self) -> &'static str {
        ""
    }

    pub fn blocks(&self) -> String {
        let mut cells = String::with_capacity(GAUGE_CELLS * 3);
        cells.extend(std::iter::repeat_n(FILLED_CELL, self.filled));
        if self.partial {
            cells.push(PARTIAL_CELL);
        }
        cells.extend(std::iter::repeat_n(EMPTY_CELL, self.empty));
        cells
    }
}

/// Share of the budget in use, 0 when the budget itself is 0.
pub fn percentage(state: &ContextState) -> f64 {
    if state.max_tokens == 0 {
        return 0.0;
    }
    state.current_tokens() as f64 * 100.0 / state.max_tokens as f64
}

/// Cell counts for a percentage. Filled cells stop at the gauge width even when
/// usage runs past the budget.
fn cells(pct: f64) -> (usize, bool, usize) {
    let filled = ((pct / 10.0) as usize).min(GAUGE_CELLS);
    let partial = filled < GAUGE_CELLS && (pct as u64) % 10 >= 5;
    let empty = GAUGE_CELLS - filled - usize::from(partial);
    (filled, partial, empty)
}

pub fn render(state: &ContextState) -> GaugeRender {
    let pct = percentage(state);
    let (filled, partial, empty) = cells(pct);
    let mut gauge = GaugeRender {
        percentage: pct,
        filled,
        partial,
        empty,
        tier: Tier::from_percentage(pct),
        text: String::new(),
    };
    let mut text = format!(
        "{} {}/{} ({:.0}%)",
        gauge.blocks(),
        format_token_count(state.current_tokens()),
        format_token_count(state.max_tokens),
        pct.round()
    );
    if let Some(notes) = state.notes.as_deref().filter(|n| !n.is_empty()) {
        text.push(' ');
        text.push_str(notes);
    }
    gauge.text = text;
    gauge
}

/// `1500` -> `2k`; values under a thousand are printed as is.
pub fn format_token_count(tokens: u64) -> String {
    if tokens >= 1_000 {
        format!("{:.0}k", (tokens as f64 / 1_000.0).round())
    } else {
        tokens.to_string()
    }
}
