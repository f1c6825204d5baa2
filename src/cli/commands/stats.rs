use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::{Config, HoursFormat};
use crate::errors::AppResult;
use crate::models::Summary;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::formatting::{format_hours, format_money};
use chrono::TimeZone;

pub fn print_summary(summary: &Summary, cfg: &Config) {
    let hm = cfg.hours_format == HoursFormat::Hm;

    println!("{}• Total hours:{}    {}", CYAN, RESET, format_hours(summary.total_hours, hm));
    println!("{}• Days present:{}   {}", CYAN, RESET, summary.days_present);
    println!("{}• Avg hours/day:{}  {}", CYAN, RESET, format_hours(summary.average_hours, hm));
    println!(
        "{}• Total earnings:{} {}",
        CYAN,
        RESET,
        format_money(summary.total_earnings, &cfg.currency_symbol)
    );
}

pub fn handle<Tz: TimeZone>(cmd: &Commands, cfg: &Config, tz: Tz) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let tracker = open_tracker(cfg, tz)?;
        let summary = tracker.summary();

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&summary, cfg);
        }
    }

    Ok(())
}
