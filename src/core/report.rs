//! Weekly earnings report. Reads records, never writes them.

use crate::models::{AttendanceRecord, DayEarnings, WeekReport};
use crate::utils::date::week_days;
use chrono::{NaiveDate, TimeZone};

/// Group hours and earnings by day for the Monday..Sunday week containing
/// `reference`. Days without records appear with zero amounts.
pub fn week_report<Tz: TimeZone>(
    records: &[AttendanceRecord],
    reference: NaiveDate,
    tz: &Tz,
) -> WeekReport {
    let mut days: Vec<DayEarnings> = week_days(reference)
        .into_iter()
        .map(DayEarnings::empty)
        .collect();

    for r in records {
        let day = r.day(tz);
        if let Some(row) = days.iter_mut().find(|d| d.date == day) {
            row.hours += r.hours();
            row.amount += r.earned();
            row.sessions += 1;
        }
    }

    let total_hours = days.iter().map(|d| d.hours).sum();
    let total_amount = days.iter().map(|d| d.amount).sum();

    WeekReport {
        days,
        total_hours,
        total_amount,
    }
}
