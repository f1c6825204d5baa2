//! User settings kept next to the tracker state in the same store.

use crate::errors::{AppError, AppResult};
use crate::store::{KeyValueStore, keys};

/// Parse a non-negative, finite monetary amount.
pub fn parse_amount(raw: &str) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))?;
    validate_amount(value)
}

pub fn validate_amount(value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidAmount(value.to_string()));
    }
    Ok(value)
}

pub struct Settings;

impl Settings {
    /// Stored hourly rate. Empty or unparseable values read as unset.
    pub fn hourly_rate<S: KeyValueStore>(store: &S) -> AppResult<Option<f64>> {
        Ok(store
            .get(keys::HOURLY_RATE)?
            .and_then(|raw| parse_amount(&raw).ok()))
    }

    pub fn set_hourly_rate<S: KeyValueStore>(store: &mut S, rate: f64) -> AppResult<()> {
        let rate = validate_amount(rate)?;
        store.set(keys::HOURLY_RATE, &rate.to_string())
    }

    pub fn clear_hourly_rate<S: KeyValueStore>(store: &mut S) -> AppResult<()> {
        store.remove(keys::HOURLY_RATE)
    }
}
