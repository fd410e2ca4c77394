use embedded_hal::digital::{InputPin, OutputPin};

/// A row or LED column line, driven through an embedded-hal output pin.
///
/// The line is asserted by driving it low when `low_active` is set and high otherwise. Write
/// errors are ignored: a line that fails to switch only affects the current cycle, and the next
/// cycle drives it again.
pub struct OutputLine<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> OutputLine<P> {
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Drive the line to `active` (asserted) or to its resting level
    pub fn set_active(&mut self, active: bool) {
        if active != self.low_active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }

    pub fn activate(&mut self) {
        self.set_active(true);
    }

    pub fn deactivate(&mut self) {
        self.set_active(false);
    }
}

/// A switch column line, sensed through an embedded-hal input pin
pub struct InputLine<P: InputPin> {
    pin: P,
    low_active: bool,
}

impl<P: InputPin> InputLine<P> {
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Whether the line reads its asserted level, i.e. a closed switch on the selected row
    pub fn is_active(&mut self) -> Result<bool, P::Error> {
        if self.low_active {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        }
    }
}
