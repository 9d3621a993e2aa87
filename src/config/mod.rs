use crate::core::persistence::DEFAULT_STORAGE_KEY;
use crate::core::session::{DEFAULT_ZOOM, SessionSettings};
use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use crate::models::workout::{DEFAULT_LABEL_DATE_FORMAT, is_valid_date_format};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Position used as the map center; the map stays disabled without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_location: Option<GeoPoint>,
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,
    #[serde(default = "default_label_date_format")]
    pub label_date_format: String,
}

fn default_storage_dir() -> String {
    Config::config_dir()
        .join("storage")
        .to_string_lossy()
        .to_string()
}
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_map_zoom() -> u8 {
    DEFAULT_ZOOM
}
fn default_label_date_format() -> String {
    DEFAULT_LABEL_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
            home_location: None,
            map_zoom: default_map_zoom(),
            label_date_format: default_label_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rcardio`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rcardio")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcardio.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("storage_key must not be empty".into()));
        }
        if !is_valid_date_format(&self.label_date_format) {
            return Err(AppError::Config(format!(
                "label_date_format '{}' is not a valid date format",
                self.label_date_format
            )));
        }
        Ok(())
    }

    /// Storage directory with `~/` expanded.
    pub fn storage_path(&self) -> PathBuf {
        expand_tilde(&self.storage_dir)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            zoom: self.map_zoom,
            label_date_format: self.label_date_format.clone(),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration file and storage directory.
    ///
    /// When `is_test` is set the configuration file is left untouched and only
    /// the storage directory is created.
    pub fn init_all(&self, path: &Path, is_test: bool) -> AppResult<()> {
        if !is_test {
            self.save_to(path)?;
        }
        fs::create_dir_all(self.storage_path())?;
        Ok(())
    }
}
