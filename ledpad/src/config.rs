//! Compile-time configuration of the pad.
//!
//! The constants are generated by the build script from the file pointed to by
//! `LEDPAD_TOML_PATH`, or from the reference 2x4 pad when it's not set.

include!(concat!(env!("OUT_DIR"), "/constants.rs"));

const _: () = assert!(
    SWITCH_ROWS == LED_ROWS && SWITCH_COLS == LED_COLS,
    "every switch needs a co-located LED"
);

/// Active levels of the pad's lines.
///
/// Each flag is `true` when the line is asserted by driving (or reading) it low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PadPolarity {
    /// Row select lines, shared by the switch plane and the LED plane
    pub row_low_active: bool,
    /// LED column lines
    pub led_col_low_active: bool,
    /// Switch column lines, low active when the inputs are pulled up
    pub switch_low_active: bool,
}

impl PadPolarity {
    /// Polarity from the build configuration
    pub const REFERENCE: Self = Self {
        row_low_active: ROW_LOW_ACTIVE,
        led_col_low_active: LED_COLUMN_LOW_ACTIVE,
        switch_low_active: SWITCH_LOW_ACTIVE,
    };
}

impl Default for PadPolarity {
    fn default() -> Self {
        Self::REFERENCE
    }
}
