pub mod config;
pub mod log;
pub mod persist;
pub mod report;
pub mod settings;
pub mod stats;
pub mod tracker;

pub use tracker::{CheckInOutcome, CheckOutOutcome, EarningsSource, SessionTracker};
