//! Port expander abstractions
//!
//! A 16-line GPIO expander split into two 8-bit ports. Lines 0-7 belong to
//! port A and lines 8-15 to port B, matching the numbering used by the
//! common MCP23017 drivers.

/// One of the two 8-bit ports of the expander
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Lines 0-7
    A,
    /// Lines 8-15
    B,
}

impl Port {
    /// Port that owns the given line number (0-15)
    pub const fn of_line(line: u8) -> Self {
        if line < 8 {
            Port::A
        } else {
            Port::B
        }
    }
}

/// Logic level of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// 16-line GPIO port expander
///
/// Implementations wrap the expander's own register protocol (I2C or SPI).
/// The operations are infallible from the caller's point of view: the
/// displays behind the expander give no acknowledgment, so a failed bus
/// transfer is indistinguishable from a successful one anyway.
pub trait PortExpander {
    /// Bring up the expander at its hardware address (0-7)
    ///
    /// The address selects which of the eight possible expanders on the
    /// shared bus answers; it is the value strapped on the A2:A0 pins.
    fn begin(&mut self, address: u8);

    /// Configure the direction of all 16 lines at once
    ///
    /// Bit `n` controls line `n`: 1 = input, 0 = output.
    fn set_direction(&mut self, mask: u16);

    /// Configure the direction of one 8-bit port
    ///
    /// Bit `n` controls line `n` of the port: 1 = input, 0 = output.
    fn set_port_direction(&mut self, port: Port, mask: u8);

    /// Drive a single line (0-15) to the given level
    fn write_pin(&mut self, line: u8, level: Level);

    /// Write all 8 lines of a port in one operation
    fn write_port(&mut self, port: Port, value: u8);

    /// Sample all 8 lines of a port in one operation
    fn read_port(&mut self, port: Port) -> u8;

    /// Drive a single line high
    fn set_high(&mut self, line: u8) {
        self.write_pin(line, Level::High);
    }

    /// Drive a single line low
    fn set_low(&mut self, line: u8) {
        self.write_pin(line, Level::Low);
    }
}

impl<T: PortExpander + ?Sized> PortExpander for &mut T {
    fn begin(&mut self, address: u8) {
        T::begin(self, address);
    }

    fn set_direction(&mut self, mask: u16) {
        T::set_direction(self, mask);
    }

    fn set_port_direction(&mut self, port: Port, mask: u8) {
        T::set_port_direction(self, port, mask);
    }

    fn write_pin(&mut self, line: u8, level: Level) {
        T::write_pin(self, line, level);
    }

    fn write_port(&mut self, port: Port, value: u8) {
        T::write_port(self, port, value);
    }

    fn read_port(&mut self, port: Port) -> u8 {
        T::read_port(self, port)
    }
}
