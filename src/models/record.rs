use crate::utils::date::{iso8601, local_day};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One completed work session, as stored in `attendance_data`.
///
/// `check_out`, `total_hours` and `earnings` are optional on the wire: records
/// written by other clients may omit them, and they are then read as zero
/// by the aggregates without being filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,

    #[serde(with = "iso8601")]
    pub check_in: DateTime<Utc>,

    #[serde(
        default,
        with = "iso8601::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_out: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earnings: Option<f64>,
}

impl AttendanceRecord {
    /// Close a session opened at `check_in` at `check_out`.
    pub fn closed(check_in: DateTime<Utc>, check_out: DateTime<Utc>, earnings: f64) -> Self {
        Self {
            date: check_out,
            check_in,
            check_out: Some(check_out),
            total_hours: Some(hours_between(check_in, check_out)),
            earnings: Some(earnings),
        }
    }

    /// Calendar day the record is attributed to, in `tz`.
    pub fn day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        local_day(&self.date, tz)
    }

    pub fn hours(&self) -> f64 {
        self.total_hours.unwrap_or(0.0)
    }

    pub fn earned(&self) -> f64 {
        self.earnings.unwrap_or(0.0)
    }
}

/// Elapsed time between two instants, in fractional hours.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / 3_600_000.0
}
