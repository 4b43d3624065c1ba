use std::path::PathBuf;

use thiserror::Error;

use crate::types::Cell;

/// Errors raised while decoding or replaying a single game.
///
/// Every variant is fatal for the game being processed: the replay
/// driver never returns a partial record set alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("malformed transcript: {0}")]
    MalformedTranscript(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("move target {index} is already occupied by {occupant:?}")]
    IllegalMoveTarget { index: usize, occupant: Cell },

    #[error("board index {0} is out of range")]
    IndexOutOfRange(usize),

    #[error("move at {index} captures no discs")]
    NoCapture { index: usize },
}

pub type Result<T> = std::result::Result<T, ReplayError>;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
