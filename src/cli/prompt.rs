use std::io::{self, BufRead, Write};

use crate::error::DashfwError;
use crate::provision::ApplyMode;

/// Ask once, before any per-network processing, whether existing rules should
/// be overwritten. The answer applies to all target networks uniformly;
/// declining (the default) selects merge mode.
pub fn confirm_apply_mode() -> Result<ApplyMode, DashfwError> {
    print!("Overwrite each network's existing L3 rules? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_answer(&answer))
}

fn parse_answer(answer: &str) -> ApplyMode {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => ApplyMode::Overwrite,
        _ => ApplyMode::Merge,
    }
}
