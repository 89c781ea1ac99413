//! Application settings for Jotpad.
//!
//! Preferences live in a JSON file at an OS-appropriate location. The file is
//! only ever read; a missing or unreadable file falls back to defaults.

use jotpad_core::DEFAULT_PREVIEW_CHARS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Undo steps kept per editing session unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub theme: ThemeChoice,
    /// Maximum undo depth in the editor; 0 keeps every step.
    pub history_limit: usize,
    /// Characters of content shown under each title in the note list.
    pub preview_chars: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

/// Errors reading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Directory name under the platform config location.
const APP_DIR: &str = "jotpad";
const SETTINGS_FILE: &str = "settings.json";

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/jotpad/settings.json`
/// - Windows: `%APPDATA%/jotpad/settings.json`
pub fn settings_file_path() -> PathBuf {
    let config_root = if cfg!(target_os = "windows") {
        dirs::config_dir()
    } else {
        dirs::home_dir().map(|home| home.join(".config"))
    };
    config_root
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(SETTINGS_FILE)
}

/// Reads and parses the settings file at `path`.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, SettingsError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Loads settings from disk; returns defaults if the file is missing or corrupt.
pub fn load_settings() -> AppSettings {
    load_settings_or_default(&settings_file_path())
}

fn load_settings_or_default(path: &Path) -> AppSettings {
    match load_settings_from(path) {
        Ok(settings) => settings,
        Err(SettingsError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No settings file at {}, using defaults", path.display());
            AppSettings::default()
        }
        Err(e) => {
            log::warn!("Ignoring settings file {}: {e}", path.display());
            AppSettings::default()
        }
    }
}
