pub mod day_earnings;
pub mod record;
pub mod session;
pub mod summary;

pub use day_earnings::{DayEarnings, WeekReport};
pub use record::AttendanceRecord;
pub use session::SessionState;
pub use summary::Summary;
