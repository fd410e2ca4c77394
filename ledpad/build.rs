use std::path::Path;
use std::{env, fs};

use const_gen::*;
use ledpad_config::PadTomlConfig;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LEDPAD_TOML_PATH");

    // Read pad.toml if it's present, otherwise build the reference pad
    let pad_config = if let Ok(toml_path) = env::var("LEDPAD_TOML_PATH") {
        println!("cargo:rerun-if-changed={toml_path}");
        PadTomlConfig::new_from_toml_path(&toml_path).unwrap_or_else(|e| panic!("{e}"))
    } else {
        PadTomlConfig::default()
    };

    let constants = get_constants_str(&pad_config);

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(config: &PadTomlConfig) -> String {
    let matrix = &config.matrix;
    let polarity = &config.polarity;
    [
        const_declaration!(pub SWITCH_ROWS = matrix.switch_rows),
        const_declaration!(pub SWITCH_COLS = matrix.switch_cols),
        const_declaration!(pub LED_ROWS = matrix.led_rows),
        const_declaration!(pub LED_COLS = matrix.led_cols),
        const_declaration!(pub MAX_DEBOUNCE = config.debounce.max_debounce),
        const_declaration!(pub ROW_LOW_ACTIVE = polarity.row_drive.is_low()),
        const_declaration!(pub LED_COLUMN_LOW_ACTIVE = polarity.led_column.is_low()),
        const_declaration!(pub SWITCH_LOW_ACTIVE = polarity.switch_pressed.is_low()),
    ]
    .join("\n")
}
