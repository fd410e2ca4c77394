//! Default values of the reference button pad.
//!
//! The reference pad is a 2x4 switch matrix with a co-located 2x4 LED matrix. Both planes
//! select a row by pulling it low, LEDs light when their column is driven high and the switch
//! columns are pulled up, so a closed switch reads low.

use crate::ActiveLevel;

/// Number of switch rows
pub const SWITCH_ROWS: usize = 2;

/// Number of switch columns
pub const SWITCH_COLS: usize = 4;

/// Number of LED rows
pub const LED_ROWS: usize = 2;

/// Number of LED columns
pub const LED_COLS: usize = 4;

/// Number of consistent samples needed to confirm a press or a release
pub const MAX_DEBOUNCE: u8 = 3;

/// Level that selects a row
pub const ROW_DRIVE: ActiveLevel = ActiveLevel::Low;

/// Level that turns an LED column on
pub const LED_COLUMN: ActiveLevel = ActiveLevel::High;

/// Level a closed switch reads
pub const SWITCH_PRESSED: ActiveLevel = ActiveLevel::Low;

/// Upper bound of `rows * cols`, key indices are reported as `u16`
pub const KEY_COUNT_LIMIT: usize = u16::MAX as usize + 1;
