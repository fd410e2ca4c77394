//! Errors raised while loading `pad.toml`.
//!
//! They end up as the panic message of `ledpad`'s build script, so every variant names the file
//! or the key at fault.

use std::fmt;

/// Why a pad configuration was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file at `path` couldn't be read
    FileRead { path: String, message: String },
    /// Not valid TOML, an unknown key or a value of the wrong type
    TomlParse { path: String, message: String },
    /// Keys that are fine on their own but inconsistent together, e.g. mismatched planes
    Validation { field: String, message: String },
    /// A single key outside its allowed range
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => write!(f, "Can't read pad config '{path}': {message}"),
            ConfigError::TomlParse { path, message } => write!(f, "Malformed pad config '{path}': {message}"),
            ConfigError::Validation { field, message } => write!(f, "Inconsistent [{field}]: {message}"),
            ConfigError::InvalidValue { field, value, expected } => {
                write!(f, "Bad value {value} for `{field}`, expected {expected}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of loading a pad configuration
pub type ConfigResult<T> = Result<T, ConfigError>;
