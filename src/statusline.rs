//! # Status Line Module
//!
//! Builds the full line for one status event: identity, directory, branch,
//! model, cost and the context gauge.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::display::{DEFAULT_SEPARATOR, SegmentColor, Section, StatusLine};
use crate::gauge;
use crate::models::HookJson;
use crate::transcript::scan_transcript;
use crate::utils::{dir_basename, format_cost, user_at_host};

#[derive(Debug, Clone)]
pub struct StatusOptions {
    pub separator: String,
    /// Include the branch section when the directory is inside a repository
    pub git: bool,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            git: true,
        }
    }
}

pub fn parse_hook(input: &[u8]) -> Result<HookJson> {
    serde_json::from_slice(input).context("failed to decode status hook event")
}

pub fn build_status_line(hook: &HookJson, opts: &StatusOptions) -> Result<StatusLine> {
    let identity = user_at_host()?;

    let context = scan_transcript(Path::new(&hook.transcript_path))
        .context("failed to parse context from transcript")?;
    let gauge = gauge::render(&context);
    debug!(
        "context {:.1}% of {} tokens ({:?})",
        gauge.percentage, context.max_tokens, gauge.tier
    );

    let mut sections = vec![
        Section::new("👤", identity, None),
        Section::new(
            "📁",
            dir_basename(&hook.workspace.current_dir),
            Some(SegmentColor::Cyan),
        ),
    ];
    if opts.git {
        if let Some(branch) = branch_for(&hook.workspace.current_dir) {
            sections.push(Section::new("⎇", branch, Some(SegmentColor::Magenta)));
        }
    }
    sections.push(Section::new(
        "🤖",
        hook.model.display_name.clone(),
        Some(SegmentColor::Green),
    ));
    sections.push(Section::new(
        "💰",
        format_cost(hook.cost.as_ref().map(|c| c.total_cost_usd).unwrap_or_default()),
        Some(SegmentColor::Yellow),
    ));
    sections.push(Section::from(&gauge));

    Ok(StatusLine {
        separator: opts.separator.clone(),
        sections,
    })
}

#[cfg(feature = "git")]
fn branch_for(dir: &str) -> Option<String> {
    if dir.is_empty() {
        return None;
    }
    crate::git::read_git_branch(Path::new(dir))
}

#[cfg(not(feature = "git"))]
fn branch_for(_dir: &str) -> Option<String> {
    None
}
