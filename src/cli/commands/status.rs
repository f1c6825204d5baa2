use super::{open_tracker, resolve_now};
use crate::cli::parser::Commands;
use crate::config::{Config, HoursFormat};
use crate::errors::AppResult;
use crate::models::record::hours_between;
use crate::utils::colors::{RESET, color_for_state};
use crate::utils::formatting::{clock_time, day_label, format_hours};
use chrono::TimeZone;
use std::fmt::Display;

pub fn handle<Tz: TimeZone>(cmd: &Commands, cfg: &Config, tz: Tz) -> AppResult<()>
where
    Tz::Offset: Display,
{
    if let Commands::Status { at } = cmd {
        let now = resolve_now(at)?;
        let tracker = open_tracker(cfg, tz)?;
        let tz = tracker.timezone();
        let hm = cfg.hours_format == HoursFormat::Hm;

        let session = tracker.session();
        let color = color_for_state(session.is_checked_in());

        match session.current_check_in() {
            Some(since) => {
                println!(
                    "{}● Checked in{} since {} {} ({} h elapsed)",
                    color,
                    RESET,
                    day_label(&since, tz, false),
                    clock_time(&since, tz),
                    format_hours(hours_between(since, now).max(0.0), hm)
                );
            }
            None => println!("{}○ Not checked in{}", color, RESET),
        }

        if let Some(r) = tracker.record_for_day(&now) {
            println!(
                "Today ({}) is already recorded: {} h",
                tracker.day_of(&now),
                format_hours(r.hours(), hm)
            );
        }

        println!();
        super::stats::print_summary(&tracker.summary(), cfg);
    }

    Ok(())
}
