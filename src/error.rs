//! Error types.
//!
//! Calculator operations themselves never fail; these cover the edges
//! around them: key parsing, configuration and the system clipboard.

use std::path::PathBuf;
use thiserror::Error;

/// Error when turning key text into calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token that does not name any key or command.
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// A character outside `0..=9` used as a digit.
    #[error("Not a decimal digit: {0:?}")]
    InvalidDigit(char),

    /// `recall:<n>` with a position that is not a positive integer.
    #[error("Invalid history position: {0:?}")]
    InvalidRecall(String),
}

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists (or was requested explicitly) but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the config schema.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range.
    #[error("Invalid config value `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Errors from the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}
