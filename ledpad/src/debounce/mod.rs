use crate::event::Transition;

pub mod counter_debouncer;

pub trait DebouncerTrait<const ROW: usize, const COL: usize> {
    /// Feed one raw sample of the switch at (`row_idx`, `col_idx`).
    ///
    /// `raw_pressed` is true when the switch read its pressed level.
    fn detect_change_with_debounce(&mut self, row_idx: usize, col_idx: usize, raw_pressed: bool) -> DebounceState;

    /// Same as `detect_change_with_debounce`, keeping only confirmed transitions
    fn update(&mut self, row_idx: usize, col_idx: usize, raw_pressed: bool) -> Option<Transition> {
        match self.detect_change_with_debounce(row_idx, col_idx, raw_pressed) {
            DebounceState::Debounced(transition) => Some(transition),
            DebounceState::InProgress | DebounceState::Ignored => None,
        }
    }
}

/// Debounce state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// The sample confirmed a new state
    Debounced(Transition),
    /// The switch is between its confirmed states
    InProgress,
    /// The sample agrees with the confirmed state
    Ignored,
}
