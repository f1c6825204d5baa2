use super::{audit, open_tracker, resolve_now};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{clock_time, day_label};
use chrono::TimeZone;
use std::fmt::Display;

pub fn handle<Tz: TimeZone>(cmd: &Commands, cfg: &Config, tz: Tz) -> AppResult<()>
where
    Tz::Offset: Display,
{
    if let Commands::In { at } = cmd {
        let now = resolve_now(at)?;
        let mut tracker = open_tracker(cfg, tz)?;

        match tracker.check_in(now) {
            Ok(outcome) => {
                let tz = tracker.timezone();
                if let Some(old) = outcome.replaced {
                    warning(format!(
                        "The session opened on {} at {} was never closed and has been replaced.",
                        day_label(&old, tz, false),
                        clock_time(&old, tz)
                    ));
                }
                success(format!("Checked in at {}", clock_time(&outcome.at, tz)));

                let msg = format!("Checked in at {}", outcome.at.to_rfc3339());
                audit(tracker.store(), "checkin", &day_label(&now, tz, false), &msg);
            }
            Err(AppError::AlreadyCheckedInToday(day)) => {
                warning(format!(
                    "Already checked in: attendance for {} is already recorded.",
                    day
                ));
                audit(
                    tracker.store(),
                    "checkin_rejected",
                    &day.to_string(),
                    "Attendance already recorded for this day",
                );
            }
            Err(e @ AppError::BeforeCheckIn { .. }) => {
                warning(format!("Check-in rejected: {}", e));
                audit(
                    tracker.store(),
                    "checkin_rejected",
                    &day_label(&now, tracker.timezone(), false),
                    &e.to_string(),
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
