use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::{PadPolarity, SWITCH_COLS, SWITCH_ROWS};
use crate::debounce::DebouncerTrait;
use crate::debounce::counter_debouncer::CounterDebouncer;
use crate::driver::gpio::{InputLine, OutputLine};
use crate::event::{EventSink, KeyEvent, Transition};

/// Desired on/off state of every LED, indexed `[row][col]`
pub type LedBuffer<const ROW: usize, const COL: usize> = [[bool; COL]; ROW];

/// Scanner of the reference pad, sized by the build configuration
pub type ReferenceScanner<In, Out> =
    MatrixScanner<In, Out, CounterDebouncer<SWITCH_ROWS, SWITCH_COLS>, SWITCH_ROWS, SWITCH_COLS>;

/// Row-multiplexed switch matrix with a co-located LED matrix.
///
/// The switch plane and the LED plane share their row timing: selecting row `r` selects both the
/// switches and the LEDs of that row. LED columns are shared by all rows, so an LED can only be
/// lit while its row is selected and every column is turned off again before the next row.
///
/// Each call of [`MatrixScanner::scan_cycle`] handles exactly one row, the caller is expected to
/// call it at a steady, high enough rate for the LEDs to look continuously lit.
pub struct MatrixScanner<In: InputPin, Out: OutputPin, D: DebouncerTrait<ROW, COL>, const ROW: usize, const COL: usize>
{
    /// Row select lines of the switch plane
    switch_rows: [OutputLine<Out>; ROW],
    /// Row select lines of the LED plane
    led_rows: [OutputLine<Out>; ROW],
    /// Column sense lines of the switch plane
    switch_cols: [InputLine<In>; COL],
    /// Column drive lines of the LED plane
    led_cols: [OutputLine<Out>; COL],
    /// Debouncer
    debouncer: D,
    /// LED state, updated on confirmed transitions
    led_buffer: LedBuffer<ROW, COL>,
    /// Row handled by the next scan cycle
    cursor: usize,
}

impl<In: InputPin, Out: OutputPin, D: DebouncerTrait<ROW, COL>, const ROW: usize, const COL: usize>
    MatrixScanner<In, Out, D, ROW, COL>
{
    const VALID_SIZE: () = assert!(
        ROW > 0 && COL > 0 && ROW * COL <= u16::MAX as usize + 1,
        "matrix needs at least one row and one column, and at most 65536 keys"
    );

    /// Create a scanner from the pins of both planes.
    ///
    /// The pins must already be configured by the HAL: row and LED column lines as push-pull
    /// outputs, switch columns as inputs with the pull matching `polarity`.
    pub fn new(
        switch_row_pins: [Out; ROW],
        led_row_pins: [Out; ROW],
        switch_col_pins: [In; COL],
        led_col_pins: [Out; COL],
        debouncer: D,
        polarity: PadPolarity,
    ) -> Self {
        let () = Self::VALID_SIZE;
        MatrixScanner {
            switch_rows: switch_row_pins.map(|p| OutputLine::new(p, polarity.row_low_active)),
            led_rows: led_row_pins.map(|p| OutputLine::new(p, polarity.row_low_active)),
            switch_cols: switch_col_pins.map(|p| InputLine::new(p, polarity.switch_low_active)),
            led_cols: led_col_pins.map(|p| OutputLine::new(p, polarity.led_col_low_active)),
            debouncer,
            led_buffer: [[false; COL]; ROW],
            cursor: 0,
        }
    }

    /// Park every line at its resting level: rows deselected, LED columns off
    pub fn init(&mut self) {
        trace!("Parking {} rows and {} columns", ROW, COL);
        for (switch_row, led_row) in self.switch_rows.iter_mut().zip(self.led_rows.iter_mut()) {
            switch_row.deactivate();
            led_row.deactivate();
        }
        for led_col in self.led_cols.iter_mut() {
            led_col.deactivate();
        }
    }

    /// Scan the row under the cursor, then move the cursor to the next row.
    ///
    /// Confirmed transitions update the LED buffer and are emitted to `sink`. When this returns,
    /// the row is deselected and every LED column is off.
    pub fn scan_cycle<S: EventSink>(&mut self, sink: &mut S) {
        let row = self.cursor;

        // Select the row on both planes
        self.switch_rows[row].activate();
        self.led_rows[row].activate();

        // Light the LEDs of this row, the other columns are still off from the last cycle
        for (led_col, on) in self.led_cols.iter_mut().zip(self.led_buffer[row].iter()) {
            if *on {
                led_col.activate();
            }
        }

        // Sample the switches of this row
        for (col, switch_col) in self.switch_cols.iter_mut().enumerate() {
            let raw_pressed = match switch_col.is_active() {
                Ok(active) => active,
                Err(_) => {
                    warn!("Failed to read switch column {}", col);
                    false
                }
            };

            if let Some(transition) = self.debouncer.update(row, col, raw_pressed) {
                debug!("Switch ({}, {}) {:?}", row, col, transition);
                self.led_buffer[row][col] = transition == Transition::Pressed;
                sink.emit(KeyEvent::new(transition, (row * COL + col) as u16));
            }
        }

        // Deselect the row and blank all columns, so nothing bleeds into the next row
        self.switch_rows[row].deactivate();
        self.led_rows[row].deactivate();
        for led_col in self.led_cols.iter_mut() {
            led_col.deactivate();
        }

        self.cursor = (self.cursor + 1) % ROW;
    }

    /// Row handled by the next scan cycle
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn led_buffer(&self) -> &LedBuffer<ROW, COL> {
        &self.led_buffer
    }

    pub fn is_led_on(&self, row: usize, col: usize) -> bool {
        self.led_buffer[row][col]
    }

    pub fn debouncer(&self) -> &D {
        &self.debouncer
    }
}
