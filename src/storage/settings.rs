//! Settings storage
//!
//! Manages persistence of user preferences.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI theme: "dark" or "light"
    pub theme: String,
    /// Font size: "small", "medium", or "large"
    pub font_size: String,
    /// Play entrance/reveal animations
    #[serde(default = "default_animations")]
    pub animations_enabled: bool,
}

fn default_animations() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            font_size: "medium".to_string(),
            animations_enabled: true,
        }
    }
}

impl AppSettings {
    /// Clamp loaded values back to the supported set
    pub fn validate(&mut self) {
        if self.theme != "dark" && self.theme != "light" {
            self.theme = "dark".to_string();
        }
        if !["small", "medium", "large"].contains(&self.font_size.as_str()) {
            self.font_size = "medium".to_string();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| read_settings(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    write_settings(&get_settings_path()?, settings)
}

fn write_settings(path: &Path, settings: &AppSettings) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.font_size, "medium");
        assert!(settings.animations_enabled);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.theme = "invalid".to_string();
        settings.validate();
        assert_eq!(settings.theme, "dark");

        settings.theme = "light".to_string();
        settings.validate();
        assert_eq!(settings.theme, "light");

        settings.font_size = "huge".to_string();
        settings.validate();
        assert_eq!(settings.font_size, "medium");
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings.theme, deserialized.theme);
        assert_eq!(settings.font_size, deserialized.font_size);
    }

    #[test]
    fn test_settings_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = AppSettings::default();
        settings.theme = "light".to_string();
        write_settings(&path, &settings).unwrap();

        let loaded = read_settings(&path).unwrap();
        assert_eq!(loaded.theme, "light");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = read_settings(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded.theme, "dark");
    }
}
