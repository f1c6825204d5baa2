use chrono::{DateTime, Utc};

/// The in-progress session.
///
/// Open iff a check-in timestamp is held, so "checked in" and "has a current
/// check-in" can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    current_check_in: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(at: DateTime<Utc>) -> Self {
        Self {
            current_check_in: Some(at),
        }
    }

    pub fn is_checked_in(&self) -> bool {
        self.current_check_in.is_some()
    }

    pub fn current_check_in(&self) -> Option<DateTime<Utc>> {
        self.current_check_in
    }
}
