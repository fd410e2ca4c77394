use super::{DebounceState, DebouncerTrait};
use crate::config::MAX_DEBOUNCE;
use crate::event::Transition;

/// Per-key up/down counting debouncer.
///
/// Every switch has a counter in `0..=MAX_DEBOUNCE`. A pressed sample moves it one step up, a
/// released sample one step down. Reaching `MAX_DEBOUNCE` confirms a press of a released switch
/// and reaching 0 confirms a release of a pressed switch, each is reported once.
///
/// A single contradicting sample only moves the counter back by one step, so isolated noise
/// delays a transition instead of restarting it. Counters that come back to the end they
/// started from report nothing.
pub struct CounterDebouncer<const ROW: usize, const COL: usize> {
    counters: [[u8; COL]; ROW],
    /// Confirmed state of every switch
    pressed: [[bool; COL]; ROW],
}

impl<const ROW: usize, const COL: usize> Default for CounterDebouncer<ROW, COL> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROW: usize, const COL: usize> CounterDebouncer<ROW, COL> {
    /// Create a debouncer with every switch confirmed released
    pub const fn new() -> Self {
        CounterDebouncer {
            counters: [[0; COL]; ROW],
            pressed: [[false; COL]; ROW],
        }
    }

    /// Current counter of the switch at (`row_idx`, `col_idx`)
    pub fn counter(&self, row_idx: usize, col_idx: usize) -> u8 {
        self.counters[row_idx][col_idx]
    }

    /// Whether the switch at (`row_idx`, `col_idx`) is confirmed pressed
    pub fn is_pressed(&self, row_idx: usize, col_idx: usize) -> bool {
        self.pressed[row_idx][col_idx]
    }
}

impl<const ROW: usize, const COL: usize> DebouncerTrait<ROW, COL> for CounterDebouncer<ROW, COL> {
    fn detect_change_with_debounce(&mut self, row_idx: usize, col_idx: usize, raw_pressed: bool) -> DebounceState {
        let counter = &mut self.counters[row_idx][col_idx];
        let pressed = &mut self.pressed[row_idx][col_idx];

        if raw_pressed {
            if *counter >= MAX_DEBOUNCE {
                return DebounceState::Ignored;
            }
            *counter += 1;
            if *counter == MAX_DEBOUNCE && !*pressed {
                *pressed = true;
                DebounceState::Debounced(Transition::Pressed)
            } else {
                DebounceState::InProgress
            }
        } else {
            if *counter == 0 {
                return DebounceState::Ignored;
            }
            *counter -= 1;
            if *counter == 0 && *pressed {
                *pressed = false;
                DebounceState::Debounced(Transition::Released)
            } else {
                DebounceState::InProgress
            }
        }
    }
}
