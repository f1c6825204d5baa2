//! Bring an older YAML config up to the current set of fields.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn current_defaults() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
    }
}

/// Field names present in the current schema but absent from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let defaults = current_defaults()?;
    let existing = read_mapping(path)?;

    Ok(defaults
        .keys()
        .filter(|k| !existing.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing field with its default value. Existing values are
/// never overwritten. Returns the names that were added.
pub fn add_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let defaults = current_defaults()?;
    let mut existing = read_mapping(path)?;
    let mut added = Vec::new();

    for (k, v) in defaults {
        if !existing.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            existing.insert(k, v);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(existing))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
