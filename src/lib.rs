//! # Session Statusline
//!
//! A single-line status summary for an assistant coding session: user and
//! host, working directory, git branch, model, running cost and how much of
//! the context window is in use.
//!
//! ## Overview
//!
//! The session event arrives as JSON on stdin. Context usage comes from the
//! session transcript, where the most recent assistant turn reports the token
//! counts for the whole conversation. Those counts are rendered as a ten cell
//! gauge colored by severity.
//!
//! ## Features
//!
//! - `git` (default): Enables the branch section via gix
//! - `colors` (default): Enables terminal color output via owo-colors

/// Command-line arguments and configuration
pub mod cli;

/// Section formatting and the joined status line
pub mod display;

/// Context window gauge
pub mod gauge;

/// Git branch lookup (feature-gated)
#[cfg(feature = "git")]
pub mod git;

/// Data models for the status event, transcript lines and context state
pub mod models;

/// Assembly of the full status line
pub mod statusline;

/// Transcript scanning
pub mod transcript;

/// Environment lookups and small formatting helpers
pub mod utils;
