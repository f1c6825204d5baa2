use super::{audit, open_tracker, resolve_now};
use crate::cli::parser::Commands;
use crate::config::{Config, HoursFormat};
use crate::core::settings::{Settings, parse_amount};
use crate::core::{CheckOutOutcome, EarningsSource};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::{clock_time, day_label, format_hours, format_money};
use chrono::TimeZone;
use std::fmt::Display;

pub fn handle<Tz: TimeZone>(cmd: &Commands, cfg: &Config, tz: Tz) -> AppResult<()>
where
    Tz::Offset: Display,
{
    if let Commands::Out { at, earnings } = cmd {
        let now = resolve_now(at)?;
        let explicit = earnings.as_deref().map(parse_amount).transpose()?;

        let mut tracker = open_tracker(cfg, tz)?;

        let source = match explicit {
            Some(amount) => EarningsSource::Amount(amount),
            None => match Settings::hourly_rate(tracker.store())? {
                Some(rate) => EarningsSource::HourlyRate(rate),
                None => EarningsSource::None,
            },
        };

        match tracker.check_out(now, source) {
            Ok(CheckOutOutcome::Closed(record)) => {
                let tz = tracker.timezone();
                let hm = cfg.hours_format == HoursFormat::Hm;
                success(format!(
                    "Checked out at {}: worked {} h, earned {}",
                    clock_time(&now, tz),
                    format_hours(record.hours(), hm),
                    format_money(record.earned(), &cfg.currency_symbol)
                ));

                let msg = format!(
                    "Checked out at {} ({:.2} h, earnings {:.2})",
                    now.to_rfc3339(),
                    record.hours(),
                    record.earned()
                );
                audit(tracker.store(), "checkout", &day_label(&record.date, tz, false), &msg);
            }
            Ok(CheckOutOutcome::NotCheckedIn) => {
                info("Not checked in: nothing to close.");
                audit(
                    tracker.store(),
                    "checkout_skipped",
                    "",
                    "Check-out requested without an open session",
                );
            }
            Err(e @ (AppError::BeforeCheckIn { .. } | AppError::AlreadyCheckedInToday(_))) => {
                warning(format!("Check-out rejected: {}", e));
                audit(
                    tracker.store(),
                    "checkout_rejected",
                    &day_label(&now, tracker.timezone(), false),
                    &e.to_string(),
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
