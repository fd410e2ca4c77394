//! Scanning of a row-multiplexed button pad with co-located LEDs.
//!
//! Switches and LEDs share their row lines and are driven one row at a time. Every scan cycle
//! lights the LEDs of the selected row, samples its switches through a debouncer and mirrors
//! each confirmed press or release onto the LED buffer.
//!
//! Pins are anything implementing the embedded-hal 1.0 digital traits, key events go to an
//! [`EventSink`](event::EventSink). The caller owns the timing and calls
//! [`MatrixScanner::scan_cycle`](matrix::MatrixScanner::scan_cycle) repeatedly.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub mod config;
pub mod debounce;
pub mod driver;
pub mod event;
pub mod matrix;

pub use config::PadPolarity;
pub use debounce::counter_debouncer::CounterDebouncer;
pub use debounce::{DebounceState, DebouncerTrait};
pub use event::{EventSink, KeyEvent, LogSink, Transition};
pub use matrix::{LedBuffer, MatrixScanner, ReferenceScanner};
