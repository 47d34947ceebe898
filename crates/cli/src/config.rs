//! Binary configuration loaded from environment variables.

use std::path::{Path, PathBuf};

use recordkeep_observability::{LogFormat, LogSettings, UnknownLogFormat};

/// Runtime configuration with defaults.
///
/// Reads from environment variables:
/// - `RECORDKEEP_DATA_DIR`: directory holding data files (default: `.`)
/// - `RECORDKEEP_LOG_FORMAT`: `text` or `json` (default: `text`)
/// - `RUST_LOG`: tracing filter directive (default: `warn`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log: LogSettings,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, UnknownLogFormat> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UnknownLogFormat> {
        let defaults = Self::default();

        let format = match lookup("RECORDKEEP_LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => defaults.log.format,
        };

        Ok(Self {
            data_dir: lookup("RECORDKEEP_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            log: LogSettings {
                format,
                default_directive: lookup("RUST_LOG").unwrap_or(defaults.log.default_directive),
            },
        })
    }

    /// `file_name` inside the data directory.
    pub fn data_file(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log: LogSettings::default(),
        }
    }
}
