//! Configuration management for punchlog.
//!
//! Settings live in `config.json` inside the per-user data directory. A
//! missing file is not an error: every field is optional and the defaults
//! (host time zone, exports in the working directory) apply.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchlog::libs::config::Config;
//!
//! let config = Config::read()?;
//! let zone = config.zone()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::zone::ReportZone;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root configuration object.
///
/// Unset fields are skipped on save so the file only holds what the user
/// actually chose.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// IANA zone name (`Europe/Berlin`) used for report dates and clock
    /// times. When absent, the host's local zone applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Directory that relative export paths are resolved against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file; a missing file is fine.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn zone(&self) -> Result<ReportZone> {
        Ok(ReportZone::from_config(self.timezone.as_deref())?)
    }

    /// Resolves an export target: relative paths land in `export_dir` when set.
    pub fn export_path(&self, path: PathBuf) -> PathBuf {
        match &self.export_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }

    /// Interactive setup wizard seeded with the current values.
    ///
    /// The time zone is validated before it is accepted, so a saved config
    /// never carries a name `chrono-tz` cannot resolve.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader);

        let timezone: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimezone.to_string())
            .default(current.timezone.clone().unwrap_or_default())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                ReportZone::from_config(Some(input)).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;

        let export_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportDir.to_string())
            .default(current.export_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Config {
            timezone: Some(timezone.trim().to_string()).filter(|t| !t.is_empty()),
            export_dir: Some(export_dir.trim().to_string()).filter(|d| !d.is_empty()).map(PathBuf::from),
        })
    }
}
