use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// When a record is taken relative to its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotTiming {
    /// Board after the move has been applied.
    #[default]
    AfterMove,
    /// Board the mover faced, paired with the move that was played.
    BeforeMove,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub snapshot: SnapshotTiming,
    /// Reject placements that flip nothing. Off by default: transcripts
    /// are trusted as recorded.
    pub require_captures: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub header: bool,
    pub delimiter: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            header: true,
            delimiter: ',',
        }
    }
}

/// Top-level converter configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub replay: ReplayConfig,
    pub output: OutputConfig,
}

impl ConverterConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = self.output.delimiter;
        // Cell values are written as `0`, `1` and `-1`.
        if d.is_ascii_digit() || d == '-' || d == '\n' || d == '\r' {
            return Err(ConfigError::Validation(format!(
                "output.delimiter {d:?} collides with cell values or line endings"
            )));
        }
        Ok(())
    }
}
