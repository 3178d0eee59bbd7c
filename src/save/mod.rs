//! Save/load system
//!
//! Handles the persisted settings file.

pub mod settings;

pub use settings::{
    Settings, SettingsError,
    load_settings, save_settings, load_settings_from, save_settings_to,
    settings_path, data_directory,
};
