use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::{Config, HoursFormat};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{clock_time, format_hours, format_money};
use crate::utils::table::{Column, Table};
use chrono::TimeZone;
use std::fmt::Display;

pub fn handle<Tz: TimeZone>(cmd: &Commands, cfg: &Config, tz: Tz) -> AppResult<()>
where
    Tz::Offset: Display,
{
    if let Commands::List { limit } = cmd {
        let tracker = open_tracker(cfg, tz)?;
        let tz = tracker.timezone();
        let records = tracker.records();

        if records.is_empty() {
            info("No attendance records yet");
            return Ok(());
        }

        let hm = cfg.hours_format == HoursFormat::Hm;
        let shown = limit.unwrap_or(records.len()).min(records.len());

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("Check In"),
            Column::left("Check Out"),
            Column::right("Hours"),
            Column::right("Earnings"),
        ]);

        for r in &records[..shown] {
            let day = r.day(tz);
            let date = match cfg.show_weekday.label(day) {
                Some(wd) => format!("{} {}", wd, day),
                None => day.to_string(),
            };
            let check_out = r
                .check_out
                .map(|t| clock_time(&t, tz))
                .unwrap_or_else(|| "-".to_string());
            let hours = r
                .total_hours
                .map(|h| format_hours(h, hm))
                .unwrap_or_else(|| "-".to_string());
            let earnings = r
                .earnings
                .map(|e| format_money(e, &cfg.currency_symbol))
                .unwrap_or_else(|| "-".to_string());

            table.add_row(vec![
                date,
                clock_time(&r.check_in, tz),
                colorize_optional(&check_out),
                colorize_optional(&hours),
                colorize_optional(&earnings),
            ]);
        }

        print!("{}", table.render());

        if shown < records.len() {
            info(format!("{} of {} records shown", shown, records.len()));
        }
    }

    Ok(())
}
