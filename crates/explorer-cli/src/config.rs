//! `explorer.toml` loading.
//!
//! Every key is optional; missing keys take the defaults below and
//! command-line flags override whatever the file says.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use explorer_ingest::DEFAULT_LOAD_DELAY;
use explorer_waittime::DEFAULT_BINS;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "explorer.toml";

pub const DEFAULT_DATA_PATH: &str = "data/input/titanic_passengers.csv";
pub const DEFAULT_PEOPLE: u32 = 200;
pub const DEFAULT_STAFF: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub data: DataConfig,
    pub wait_times: WaitTimeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: PathBuf,
    pub load_delay_secs: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            load_delay_secs: DEFAULT_LOAD_DELAY.as_secs_f64(),
        }
    }
}

impl DataConfig {
    /// The simulated load delay; negative or non-finite values mean none.
    pub fn load_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.load_delay_secs).unwrap_or(Duration::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitTimeConfig {
    pub people: u32,
    pub staff: u32,
    pub seed: Option<u64>,
    pub bins: usize,
}

impl Default for WaitTimeConfig {
    fn default() -> Self {
        Self {
            people: DEFAULT_PEOPLE,
            staff: DEFAULT_STAFF,
            seed: None,
            bins: DEFAULT_BINS,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./explorer.toml` is read
    /// if present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.data.path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.data.load_delay(), Duration::from_secs(5));
        assert_eq!(config.wait_times.people, 200);
        assert_eq!(config.wait_times.staff, 3);
        assert_eq!(config.wait_times.seed, None);
        assert_eq!(config.wait_times.bins, 30);
    }

    #[test]
    fn test_negative_delay_is_zero() {
        let data = DataConfig {
            load_delay_secs: -1.0,
            ..DataConfig::default()
        };
        assert_eq!(data.load_delay(), Duration::ZERO);
    }
}
