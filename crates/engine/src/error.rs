//! Error taxonomy for the configuration engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while registering options or applying overlays.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Option '{0}' is already registered")]
    OptionExists(String),

    #[error("Option '{0}' not found")]
    OptionNotFound(String),

    #[error("Cannot convert value '{value}' to {target}")]
    TypeConversion { value: String, target: &'static str },

    #[error("Unsupported value type at '{path}'")]
    InvalidType { path: String },

    #[error("Command line flags have already been parsed")]
    FlagsAlreadyParsed,

    #[error("Malformed argument '{arg}': {message}")]
    MalformedArgument { arg: String, message: String },

    #[error("Failed to parse config file at {path}: {source}")]
    FileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dirs(#[from] confstack_dirs::DirsError),
}

impl ConfigError {
    pub(crate) fn conversion(value: impl Into<String>, target: &'static str) -> Self {
        ConfigError::TypeConversion {
            value: value.into(),
            target,
        }
    }
}
