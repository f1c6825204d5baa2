//! One module per subcommand, plus the helpers they share.

pub mod checkin;
pub mod checkout;
pub mod clear;
pub mod config;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod rate;
pub mod report;
pub mod stats;
pub mod status;

use crate::config::Config;
use crate::core::SessionTracker;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStore;
use crate::ui::messages::{load_warnings, warning};
use crate::utils::date::parse_timestamp;
use chrono::{DateTime, TimeZone, Utc};

pub type Tracker<Tz> = SessionTracker<SqliteStore, Tz>;

/// `--at` value, or the current instant.
pub fn resolve_now(at: &Option<String>) -> AppResult<DateTime<Utc>> {
    match at {
        Some(raw) => parse_timestamp(raw).ok_or_else(|| AppError::InvalidTimestamp(raw.clone())),
        None => Ok(Utc::now()),
    }
}

/// Write an audit line; a failure here never aborts the command.
pub fn audit(store: &SqliteStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store.conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Open the store and load the tracker. Keys that failed to parse are
/// reported on screen and in the internal log.
pub fn open_tracker<Tz: TimeZone>(cfg: &Config, tz: Tz) -> AppResult<Tracker<Tz>> {
    let store = SqliteStore::open(&cfg.database)?;
    let tracker = SessionTracker::load_with_timezone(store, tz)?;

    if !tracker.warnings().is_empty() {
        load_warnings(tracker.warnings());
        for w in tracker.warnings() {
            let key = match w {
                AppError::MalformedPersistedState { key, .. } => key.as_str(),
                _ => "",
            };
            audit(tracker.store(), "malformed_state", key, &w.to_string());
        }
    }

    Ok(tracker)
}
