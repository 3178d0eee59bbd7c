//! Persistent user settings
//!
//! Only the theme preference survives between runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::Theme;

/// Current settings version for compatibility
const SETTINGS_VERSION: u32 = 1;

/// Persistent settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Version for compatibility checking
    pub version: u32,
    /// Preferred colour theme
    #[serde(default)]
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme: Theme::default(),
        }
    }
}

/// Settings error types
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Settings version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

// ============================================================================
// Settings Storage
// ============================================================================

/// Per-user data directory, or the working directory when none is known
pub fn data_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "icgrind", "ICGrind") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// Get the settings file path
pub fn settings_path() -> PathBuf {
    data_directory().join("settings.json")
}

/// Read settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: Settings = serde_json::from_str(&data)?;

    if settings.version != SETTINGS_VERSION {
        return Err(SettingsError::VersionMismatch {
            expected: SETTINGS_VERSION,
            found: settings.version,
        });
    }

    Ok(settings)
}

/// Write settings to a specific file, creating its directory
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Load the settings (or defaults)
pub fn load_settings() -> Settings {
    let path = settings_path();

    if path.exists() {
        match load_settings_from(&path) {
            Ok(settings) => {
                log::info!("Settings loaded from {:?}", path);
                return settings;
            }
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
            }
        }
    }

    Settings::default()
}

/// Save the settings
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    log::info!("Settings saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings { theme: Theme::Light, ..Settings::default() };
        save_settings_to(&settings, &path).unwrap();

        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_theme_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "version": 1 }"#).unwrap();

        assert_eq!(load_settings_from(&path).unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_version_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "version": 7, "theme": "dark" }"#).unwrap();

        assert!(matches!(
            load_settings_from(&path),
            Err(SettingsError::VersionMismatch { expected: 1, found: 7 })
        ));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_settings_from(&path), Err(SettingsError::Parse(_))));
    }
}
