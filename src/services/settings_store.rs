// browsershell settings store
// Loads and saves shell settings as a JSON file at a caller-supplied path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

/// Trait defining the settings store interface.
pub trait SettingsStoreTrait {
    fn load(&mut self) -> Result<ShellSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn settings(&self) -> &ShellSettings;
    fn set(&mut self, settings: ShellSettings) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn config_path(&self) -> &Path;
}

/// Settings store that persists shell settings as JSON on disk.
pub struct SettingsStore {
    config_path: PathBuf,
    settings: ShellSettings,
}

impl SettingsStore {
    /// Creates a store backed by the given file path. Nothing is read until
    /// [`SettingsStoreTrait::load`] is called.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: ShellSettings::default(),
        }
    }
}

impl SettingsStoreTrait for SettingsStore {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults; a malformed file is an error.
    fn load(&mut self) -> Result<ShellSettings, SettingsError> {
        if !self.config_path.exists() {
            self.settings = ShellSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: ShellSettings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(&self.config_path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns the current in-memory settings.
    fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Replaces the settings and persists them.
    fn set(&mut self, settings: ShellSettings) -> Result<(), SettingsError> {
        self.settings = settings;
        self.save()
    }

    /// Restores factory defaults and persists them.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = ShellSettings::default();
        self.save()
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }
}
