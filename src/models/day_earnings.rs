use chrono::NaiveDate;
use serde::Serialize;

/// One row of the weekly earnings report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEarnings {
    pub date: NaiveDate,
    pub hours: f64,
    pub amount: f64,
    pub sessions: usize,
}

impl DayEarnings {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            hours: 0.0,
            amount: 0.0,
            sessions: 0,
        }
    }

    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

/// Monday..Sunday rows plus the weekly total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekReport {
    pub days: Vec<DayEarnings>,
    pub total_hours: f64,
    pub total_amount: f64,
}
