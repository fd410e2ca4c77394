//! Build-time configuration of ledpad.
//!
//! The pad is described by a `pad.toml` file which is parsed and validated here, then turned
//! into compile-time constants by `ledpad`'s build script. Every key has a default, an empty
//! file describes the reference 2x4 pad.

use std::path::Path;

use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod defaults;
pub mod error;
mod validation;

pub use error::{ConfigError, ConfigResult};

/// Electrical level of a signal
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActiveLevel {
    Low,
    High,
}

impl ActiveLevel {
    pub fn is_low(self) -> bool {
        self == ActiveLevel::Low
    }
}

/// Configurations for ledpad
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PadTomlConfig {
    /// Matrix dimensions
    #[serde(default)]
    pub matrix: MatrixConfig,
    /// Debounce threshold
    #[serde(default)]
    pub debounce: DebounceConfig,
    /// Active levels of the row, LED column and switch lines
    #[serde(default)]
    pub polarity: PolarityConfig,
}

/// Dimensions of the switch plane and the LED plane
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MatrixConfig {
    #[serde_inline_default(defaults::SWITCH_ROWS)]
    pub switch_rows: usize,
    #[serde_inline_default(defaults::SWITCH_COLS)]
    pub switch_cols: usize,
    #[serde_inline_default(defaults::LED_ROWS)]
    pub led_rows: usize,
    #[serde_inline_default(defaults::LED_COLS)]
    pub led_cols: usize,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            switch_rows: defaults::SWITCH_ROWS,
            switch_cols: defaults::SWITCH_COLS,
            led_rows: defaults::LED_ROWS,
            led_cols: defaults::LED_COLS,
        }
    }
}

impl MatrixConfig {
    /// Number of switches, which is also the number of distinct key indices
    pub fn key_count(&self) -> usize {
        self.switch_rows.saturating_mul(self.switch_cols)
    }
}

/// Configuration for debouncing
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DebounceConfig {
    /// Consecutive same-state samples needed to confirm a press or a release
    #[serde_inline_default(defaults::MAX_DEBOUNCE)]
    pub max_debounce: u8,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            max_debounce: defaults::MAX_DEBOUNCE,
        }
    }
}

/// Wiring polarity of the pad
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PolarityConfig {
    /// Level selecting a row, shared by the switch and LED planes
    #[serde_inline_default(defaults::ROW_DRIVE)]
    pub row_drive: ActiveLevel,
    /// Level turning an LED column on
    #[serde_inline_default(defaults::LED_COLUMN)]
    pub led_column: ActiveLevel,
    /// Level read on a closed switch
    #[serde_inline_default(defaults::SWITCH_PRESSED)]
    pub switch_pressed: ActiveLevel,
}

impl Default for PolarityConfig {
    fn default() -> Self {
        Self {
            row_drive: defaults::ROW_DRIVE,
            led_column: defaults::LED_COLUMN,
            switch_pressed: defaults::SWITCH_PRESSED,
        }
    }
}

impl PadTomlConfig {
    /// Read, parse and validate the config file at `config_toml_path`
    pub fn new_from_toml_path<P: AsRef<Path>>(config_toml_path: P) -> ConfigResult<Self> {
        let path = config_toml_path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate a config from a TOML string
    pub fn new_from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        let config: PadTomlConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        validation::validate_config(&config)?;
        Ok(config)
    }
}
