/// A confirmed change of a switch's debounced state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    Pressed,
    Released,
}

/// Key event reported by the matrix scanner.
///
/// `key_index` is `row * COL + col` of the switch that changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub transition: Transition,
    pub key_index: u16,
}

impl KeyEvent {
    pub fn new(transition: Transition, key_index: u16) -> Self {
        Self { transition, key_index }
    }

    pub fn pressed(key_index: u16) -> Self {
        Self::new(Transition::Pressed, key_index)
    }

    pub fn released(key_index: u16) -> Self {
        Self::new(Transition::Released, key_index)
    }

    pub fn is_pressed(&self) -> bool {
        self.transition == Transition::Pressed
    }
}

/// Receiver of the key events found by the scanner.
///
/// `emit` is called from inside a scan cycle, so it should return quickly.
pub trait EventSink {
    fn emit(&mut self, event: KeyEvent);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: KeyEvent) {
        (**self).emit(event)
    }
}

/// Writes every event as a `Key pressed N` / `Key released N` line to the logger
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: KeyEvent) {
        match event.transition {
            Transition::Pressed => info!("Key pressed {}", event.key_index),
            Transition::Released => info!("Key released {}", event.key_index),
        }
    }
}
