use crate::constants::{
    CRACK_TIMEOUT_SECS, FORMATS_TIMEOUT_SECS, SHOW_TIMEOUT_SECS, VERSION_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct JohnConfig {
    pub binary: String,
    pub sessions_dir: PathBuf,
    /// Where hash files are staged before a crack run.
    pub temp_dir: PathBuf,
    /// Defaults to `$HOME/.john/john.pot` when unset.
    pub pot_file: Option<PathBuf>,
    pub formats_timeout_secs: u64,
    pub crack_timeout_secs: u64,
    pub show_timeout_secs: u64,
    pub version_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WordlistConfig {
    pub small: PathBuf,
    pub medium: PathBuf,
    pub large: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub john: JohnConfig,
    pub wordlists: WordlistConfig,
}

impl Default for JohnConfig {
    fn default() -> Self {
        Self {
            binary: String::from("john"),
            sessions_dir: PathBuf::from("sessions"),
            temp_dir: std::env::temp_dir(),
            pot_file: None,
            formats_timeout_secs: FORMATS_TIMEOUT_SECS,
            crack_timeout_secs: CRACK_TIMEOUT_SECS,
            show_timeout_secs: SHOW_TIMEOUT_SECS,
            version_timeout_secs: VERSION_TIMEOUT_SECS,
        }
    }
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            small: PathBuf::from("wordlists/common/test-small.txt"),
            medium: PathBuf::from("wordlists/common/10-million-password-list-top-10000.txt"),
            large: PathBuf::from("wordlists/common/rockyou.txt"),
        }
    }
}

impl JohnConfig {
    pub fn pot_file(&self) -> PathBuf {
        match &self.pot_file {
            Some(path) => path.clone(),
            None => std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(".john")
                .join("john.pot"),
        }
    }

    pub fn crack_timeout(&self) -> Duration {
        Duration::from_secs(self.crack_timeout_secs)
    }
}

impl WordlistConfig {
    /// Maps a preset name to its path. Anything else is taken as a path.
    pub fn resolve(&self, wordlist: &str) -> PathBuf {
        match wordlist {
            "small" => self.small.clone(),
            "medium" => self.medium.clone(),
            "large" => self.large.clone(),
            other => PathBuf::from(other),
        }
    }

    pub fn is_preset(wordlist: &str) -> bool {
        matches!(wordlist, "small" | "medium" | "large")
    }
}

impl Config {
    pub fn parse_from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::parse_from_toml(&config_str, &display)
    }
}
