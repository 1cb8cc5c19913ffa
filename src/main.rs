use anyhow::Result;

use session_statusline::cli::Args;
use session_statusline::statusline::{build_status_line, parse_hook};
use session_statusline::utils::read_stdin;

fn main() -> Result<()> {
    let args = Args::parse();
    // stdout carries only the status line
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let stdin = read_stdin()?;
    let hook = parse_hook(&stdin)?;
    log::debug!(
        "session {} transcript {}",
        hook.session_id,
        hook.transcript_path
    );

    let line = build_status_line(&hook, &args.status_options())?;
    println!("{}", line.render(args.colors_enabled()));
    Ok(())
}
