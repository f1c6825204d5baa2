use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Platform default: $EDITOR, then $VISUAL, then nano / notepad.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in `editor`, falling back to the default editor once.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let fallback = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| fallback.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => return Ok(requested),
            _ if requested == fallback => {
                return Err(AppError::Config(format!(
                    "editor '{}' failed or is not available",
                    requested
                )));
            }
            _ => {}
        }

        match Command::new(&fallback).arg(path).status() {
            Ok(s) if s.success() => Ok(fallback),
            Ok(_) | Err(_) => Err(AppError::Config(format!(
                "editor '{}' and fallback '{}' both failed",
                requested, fallback
            ))),
        }
    }
}
