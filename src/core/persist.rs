//! Reading and writing tracker state through a [`KeyValueStore`].
//!
//! Loading fails closed per key: a corrupt value is replaced by its empty
//! default and reported as a `MalformedPersistedState` warning instead of
//! an error, so one bad key never makes the tracker unusable.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, SessionState};
use crate::store::{KeyValueStore, Write, keys};
use crate::utils::date::{format_timestamp, parse_timestamp};

pub fn encode_records(records: &[AttendanceRecord]) -> AppResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Strict decoding; an empty value is an empty list.
pub fn decode_records(raw: &str) -> AppResult<Vec<AttendanceRecord>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| AppError::malformed(keys::ATTENDANCE_DATA, e))
}

pub fn load_records<S: KeyValueStore>(
    store: &S,
    warnings: &mut Vec<AppError>,
) -> AppResult<Vec<AttendanceRecord>> {
    let Some(raw) = store.get(keys::ATTENDANCE_DATA)? else {
        return Ok(Vec::new());
    };

    match decode_records(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            warnings.push(e);
            Ok(Vec::new())
        }
    }
}

pub fn load_session<S: KeyValueStore>(
    store: &S,
    warnings: &mut Vec<AppError>,
) -> AppResult<SessionState> {
    let flag = match store.get(keys::IS_CHECKED_IN)?.as_deref() {
        Some("true") => true,
        Some("false") | None => false,
        Some(other) => {
            warnings.push(AppError::malformed(
                keys::IS_CHECKED_IN,
                format!("expected \"true\" or \"false\", found '{other}'"),
            ));
            false
        }
    };

    let check_in = match store.get(keys::CURRENT_CHECKIN)? {
        Some(raw) => {
            let parsed = parse_timestamp(&raw);
            if parsed.is_none() {
                warnings.push(AppError::malformed(
                    keys::CURRENT_CHECKIN,
                    format!("invalid timestamp '{raw}'"),
                ));
            }
            parsed
        }
        None => None,
    };

    match (flag, check_in) {
        (true, Some(at)) => Ok(SessionState::open(at)),
        (false, None) => Ok(SessionState::closed()),
        (true, None) => {
            warnings.push(AppError::malformed(
                keys::IS_CHECKED_IN,
                "checked in without a check-in time; session closed",
            ));
            Ok(SessionState::closed())
        }
        (false, Some(at)) => {
            warnings.push(AppError::malformed(
                keys::CURRENT_CHECKIN,
                format!(
                    "check-in time {} present while not checked in; session closed",
                    format_timestamp(&at)
                ),
            ));
            Ok(SessionState::closed())
        }
    }
}

pub fn records_write(records: &[AttendanceRecord]) -> AppResult<Write<'static>> {
    Ok(Write::Set(keys::ATTENDANCE_DATA, encode_records(records)?))
}

/// Writes that persist `session`. An open session stores its time before
/// raising the flag; a closed one lowers the flag before dropping the time.
pub fn session_writes(session: &SessionState, out: &mut Vec<Write<'static>>) {
    match session.current_check_in() {
        Some(at) => {
            out.push(Write::Set(keys::CURRENT_CHECKIN, format_timestamp(&at)));
            out.push(Write::Set(keys::IS_CHECKED_IN, "true".to_string()));
        }
        None => {
            out.push(Write::Set(keys::IS_CHECKED_IN, "false".to_string()));
            out.push(Write::Remove(keys::CURRENT_CHECKIN));
        }
    }
}

/// Remove every key owned by the tracker.
pub fn erase<S: KeyValueStore>(store: &mut S) -> AppResult<()> {
    let writes: Vec<Write<'static>> = keys::TRACKER_KEYS.into_iter().map(Write::Remove).collect();
    store.apply(&writes)
}
