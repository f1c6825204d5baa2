/// JSON array of attendance records, newest first.
pub const ATTENDANCE_DATA: &str = "attendance_data";

/// ISO-8601 timestamp of the open session (absent while closed).
pub const CURRENT_CHECKIN: &str = "current_checkin";

/// Literal "true" / "false".
pub const IS_CHECKED_IN: &str = "is_checked_in";

/// Default hourly rate used to compute earnings at check-out.
pub const HOURLY_RATE: &str = "hourly_rate";

/// Keys owned by the tracker and erased by a full clear.
pub const TRACKER_KEYS: [&str; 3] = [ATTENDANCE_DATA, CURRENT_CHECKIN, IS_CHECKED_IN];
