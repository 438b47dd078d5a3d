//! Settings for the interactive front end, read from `config.toml` in the
//! platform config directory (`~/.config/mfun/config.toml` on linux).

use crate::{CONFIG_DIRECTORY, CONFIG_FILENAME, DurationStyle, errors::ConfigError, library};
use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// What level of logging to use. Default is "warn".
    #[serde(deserialize_with = "de_log_level")]
    pub log_level: LevelFilter,
    /// Minimum fuzzy score for title search results.
    pub search_threshold: i64,
    /// How song and playlist lengths are printed.
    pub duration_style: DurationStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_level: default_log_level(),
            search_threshold: library::MATCH_THRESHOLD,
            duration_style: DurationStyle::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default config path, falling back to the
    /// defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, or if
    /// the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::get_config_path()?;

        match path.exists() {
            true => Self::load_from_file(&path),
            false => Ok(Self::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_str = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&file_str)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Settings>(s)?)
    }

    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILENAME))
            .ok_or(ConfigError::NoConfigDir)
    }
}

fn de_log_level<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> LevelFilter {
    LevelFilter::Warn
}
