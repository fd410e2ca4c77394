//! Validation of the pad configuration

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};
use crate::{DebounceConfig, MatrixConfig, PadTomlConfig};

/// Validates the entire pad configuration
pub fn validate_config(config: &PadTomlConfig) -> ConfigResult<()> {
    validate_matrix_section(&config.matrix)?;
    validate_debounce_section(&config.debounce)?;
    Ok(())
}

/// Validates the [matrix] section
fn validate_matrix_section(matrix: &MatrixConfig) -> ConfigResult<()> {
    for (field, value) in [
        ("matrix.switch_rows", matrix.switch_rows),
        ("matrix.switch_cols", matrix.switch_cols),
        ("matrix.led_rows", matrix.led_rows),
        ("matrix.led_cols", matrix.led_cols),
    ] {
        if value == 0 {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                expected: "at least 1".to_string(),
            });
        }
    }

    // Rows are selected together and every switch lights the LED at the same position
    if matrix.led_rows != matrix.switch_rows || matrix.led_cols != matrix.switch_cols {
        return Err(ConfigError::Validation {
            field: "matrix".to_string(),
            message: format!(
                "LED matrix {}x{} must match switch matrix {}x{}",
                matrix.led_rows, matrix.led_cols, matrix.switch_rows, matrix.switch_cols
            ),
        });
    }

    if matrix.key_count() > defaults::KEY_COUNT_LIMIT {
        return Err(ConfigError::Validation {
            field: "matrix".to_string(),
            message: format!(
                "{} switches exceed the key index range of {}",
                matrix.key_count(),
                defaults::KEY_COUNT_LIMIT
            ),
        });
    }

    Ok(())
}

/// Validates the [debounce] section
fn validate_debounce_section(debounce: &DebounceConfig) -> ConfigResult<()> {
    if debounce.max_debounce == 0 {
        return Err(ConfigError::InvalidValue {
            field: "debounce.max_debounce".to_string(),
            value: debounce.max_debounce.to_string(),
            expected: format!("1 to {}", u8::MAX),
        });
    }
    Ok(())
}
