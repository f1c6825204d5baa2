//! Unified application error type.
//! All modules (store, db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::{DateTime, NaiveDate, Utc};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Tracker errors
    // ---------------------------
    #[error("Attendance already recorded for {0}")]
    AlreadyCheckedInToday(NaiveDate),

    #[error("{at} is earlier than the open check-in at {check_in}")]
    BeforeCheckIn {
        at: DateTime<Utc>,
        check_in: DateTime<Utc>,
    },

    #[error("Malformed persisted value for '{key}': {reason}")]
    MalformedPersistedState { key: String, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

impl AppError {
    pub fn malformed(key: &str, reason: impl ToString) -> Self {
        AppError::MalformedPersistedState {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
