use serde::Serialize;

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_hours: f64,
    pub days_present: usize,
    pub average_hours: f64,
    pub total_earnings: f64,
}
