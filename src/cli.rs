use std::io::IsTerminal;

use crate::display::DEFAULT_SEPARATOR;
use crate::statusline::StatusOptions;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorArg {
    /// Always emit ANSI colors, even when stdout is not a terminal
    Always,
    /// Color only when stdout is a terminal
    Auto,
    /// Plain text
    Never,
}

#[derive(clap::Parser, Debug)]
#[command(about = "Single-line status summary for an assistant coding session")]
pub struct Args {
    /// Text placed between sections
    #[arg(long, env = "STATUSLINE_SEPARATOR", default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Color output: always|auto|never (default: always, never when NO_COLOR is set)
    #[arg(long, value_enum, env = "STATUSLINE_COLOR")]
    pub color: Option<ColorArg>,

    /// Leave out the git branch section
    #[arg(long)]
    pub no_git: bool,

    /// Debug logging on stderr
    #[arg(long, env = "STATUSLINE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }

    /// Colors are forced on unless asked otherwise; the status line is
    /// usually read through a pipe by the assistant UI.
    pub fn colors_enabled(&self) -> bool {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        match self.color {
            Some(ColorArg::Always) => true,
            Some(ColorArg::Never) => false,
            Some(ColorArg::Auto) => std::io::stdout().is_terminal(),
            None => !no_color,
        }
    }

    pub fn status_options(&self) -> StatusOptions {
        StatusOptions {
            separator: self.separator.clone(),
            git: !self.no_git,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
