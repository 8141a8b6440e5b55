use crate::errors::{AppError, AppResult};
use crate::models::holidays::HolidaySet;
use crate::models::sheet::DEFAULT_COLUMN_WIDTH;
use crate::utils::date::parse_locale;
use chrono::Locale;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root folder holding one sub-folder per user
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Locale of the weekday names written in the "Day" column
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Non-working dates (YYYY-MM-DD) highlighted in new sheets
    #[serde(default = "default_holidays")]
    pub holidays: Vec<String>,
    #[serde(default = "default_column_width")]
    pub column_width: f64,
    /// Reject login/logout values that are not HH:mm
    #[serde(default)]
    pub validate_times: bool,
    /// Fail instead of warning when today has no row in the sheet
    #[serde(default)]
    pub strict_date: bool,
}

fn default_base_path() -> String {
    Config::config_dir()
        .join("status")
        .to_string_lossy()
        .to_string()
}
fn default_locale() -> String {
    "en_US".to_string()
}
fn default_holidays() -> Vec<String> {
    vec!["2026-01-26".to_string(), "2026-08-15".to_string()]
}
fn default_column_width() -> f64 {
    DEFAULT_COLUMN_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            locale: default_locale(),
            holidays: default_holidays(),
            column_width: default_column_width(),
            validate_times: false,
            strict_date: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdailystatus")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdailystatus")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdailystatus.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration file and storage folder.
    /// An existing configuration file is left untouched.
    pub fn init_all(base_override: Option<&str>) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        let mut cfg = Self::load_from(&path)?;

        if let Some(base) = base_override {
            cfg.base_path = base.to_string();
        }

        if !path.exists() || base_override.is_some() {
            cfg.save_to(&path)?;
        }

        fs::create_dir_all(cfg.base_dir())?;
        Ok(cfg)
    }

    /// Storage root, with a leading `~/` expanded to the home directory.
    pub fn base_dir(&self) -> PathBuf {
        expand_tilde(&self.base_path)
    }

    pub fn holiday_set(&self) -> AppResult<HolidaySet> {
        HolidaySet::parse(&self.holidays)
    }

    pub fn weekday_locale(&self) -> AppResult<Locale> {
        parse_locale(&self.locale)
    }

    /// Parse every value that is otherwise only read on first use.
    pub fn validate(&self) -> AppResult<()> {
        self.holiday_set()?;
        self.weekday_locale()?;
        if !(self.column_width > 0.0 && self.column_width <= 255.0) {
            return Err(AppError::Config(format!(
                "column_width must be between 0 and 255, got {}",
                self.column_width
            )));
        }
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
