//! Formatting utilities used for CLI outputs.

use chrono::{DateTime, TimeZone, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours either as a decimal (`7.5`) or as `07h 30m`.
pub fn format_hours(hours: f64, hm: bool) -> String {
    if !hm {
        return format!("{:.1}", hours);
    }

    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

pub fn format_money(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// `HH:MM` of `ts` in `tz`.
pub fn clock_time<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%H:%M").to_string()
}

/// `Mon 2024-01-01` or `2024-01-01`, depending on `show_weekday`.
pub fn day_label<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz, show_weekday: bool) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = ts.with_timezone(tz);
    if show_weekday {
        local.format("%a %Y-%m-%d").to_string()
    } else {
        local.format("%Y-%m-%d").to_string()
    }
}
