use anyhow::{Context, Result, bail};
use std::env;
use std::io::Read;

pub fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

/// Login name from `$USER`, `unknown` when unset or empty.
pub fn current_user() -> String {
    env::var("USER")
        .ok()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Kernel hostname via `gethostname(2)`, falling back to the shell's variables.
pub fn hostname() -> Result<String> {
    let name = gethostname::gethostname();
    let name = name.to_string_lossy();
    let name = name.trim();
    if !name.is_empty() {
        return Ok(name.to_string());
    }
    for var in ["HOSTNAME", "COMPUTERNAME"] {
        if let Ok(name) = env::var(var) {
            let name = name.trim();
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
    }
    bail!("failed to get hostname")
}

pub fn user_at_host() -> Result<String> {
    Ok(format!("{}@{}", current_user(), hostname()?))
}

/// Last path element, `.` for an empty path and `/` for the root.
pub fn dir_basename(dir: &str) -> String {
    if dir.is_empty() {
        return ".".to_string();
    }
    let trimmed = dir.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed).to_string()
}

pub fn format_cost(usd: f64) -> String {
    format!("${usd:.4}")
}
