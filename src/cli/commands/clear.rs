use super::{audit, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use chrono::TimeZone;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle<Tz: TimeZone>(cmd: &Commands, cfg: &Config, tz: Tz) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let prompt = "Delete ALL attendance records and the open session? This action cannot be undone.";
        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut tracker = open_tracker(cfg, tz)?;
        let count = tracker.records().len();
        tracker.clear_all()?;

        success("All attendance data has been cleared.");
        audit(
            tracker.store(),
            "clear",
            "",
            &format!("Cleared {} records and the session state", count),
        );
    }

    Ok(())
}
