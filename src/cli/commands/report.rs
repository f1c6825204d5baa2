use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::{Config, HoursFormat};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::parse_date;
use crate::utils::formatting::{bold, format_hours, format_money};
use crate::utils::table::{Column, Table};
use chrono::{TimeZone, Utc};

pub fn handle<Tz: TimeZone>(cmd: &Commands, cfg: &Config, tz: Tz) -> AppResult<()> {
    if let Commands::Report { week } = cmd {
        let tracker = open_tracker(cfg, tz)?;

        let reference = match week {
            Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?,
            None => tracker.day_of(&Utc::now()),
        };

        let report = tracker.week_report(reference);
        let hm = cfg.hours_format == HoursFormat::Hm;
        let symbol = &cfg.currency_symbol;

        let (first, last) = match (report.days.first(), report.days.last()) {
            (Some(f), Some(l)) => (f.date, l.date),
            _ => (reference, reference),
        };
        header(format!("Earnings report {} → {}", first, last));

        let mut table = Table::new(vec![
            Column::left("Day"),
            Column::left("Date"),
            Column::right("Hours"),
            Column::right(&format!("Amount ({})", symbol)),
        ]);

        for d in &report.days {
            table.add_row(vec![
                d.weekday_name(),
                d.date.format("%b %d, %Y").to_string(),
                format_hours(d.hours, hm),
                format_money(d.amount, ""),
            ]);
        }
        table.add_row(vec![
            bold("Weekly Total"),
            String::new(),
            bold(&format_hours(report.total_hours, hm)),
            bold(&format_money(report.total_amount, symbol)),
        ]);

        print!("{}", table.render());
    }

    Ok(())
}
