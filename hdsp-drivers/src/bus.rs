//! HDSP-2111 bus protocol
//!
//! The HDSP-2111 has no ready or acknowledge line, so every transaction is
//! a fixed sequence of pin transitions with a settling delay after each
//! one. The order of the transitions is part of the protocol and must not
//! be changed or coalesced.
//!
//! # Character write
//!
//! ```text
//! port A  <- RD WR CE1 CE2 high, A3 high, A2:A0 = cell
//! port B  <- character code
//! CE  low  ... WR low ... CE high ... WR high
//! ```
//!
//! # Control word write
//!
//! ```text
//! port A  <- RD WR CE1 CE2 high, A3:A0 low
//! port B  <- control word
//! CE  low  ... WR low ... WR high ... CE high
//! ```
//!
//! # Control word read
//!
//! Port B is switched to input for the duration. The first sample after
//! the direction change is unreliable and is discarded.

use embedded_hal::delay::DelayNs;
use hdsp_core::control::ControlWord;
use hdsp_core::display::{DisplayId, Window, CELLS, NUMBER_OF_DISPLAYS};
use hdsp_hal::PortExpander;

use crate::pins::{
    ADDRESS_PORT, ALL_OUTPUTS, CELL_MASK, CHARACTER_RAM, CONTROL_IDLE, DATA_PORT, HDSP_CE1,
    HDSP_CE2, HDSP_RD, HDSP_WR, PORT_INPUT, PORT_OUTPUT,
};

/// Settle time after every pin transition (ms)
pub const SETTLE_MS: u32 = 1;

/// Access time before sampling the data port on a read (ms)
pub const READ_SETTLE_MS: u32 = 3;

// One chip enable line per display
const _: () = assert!(NUMBER_OF_DISPLAYS == 2);

/// Chip enable line of one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipSelect {
    /// Display 1
    Ce1,
    /// Display 2
    Ce2,
}

impl ChipSelect {
    /// Chip enable wired to a validated display
    pub const fn for_display(id: DisplayId) -> Self {
        match id.index() {
            0 => ChipSelect::Ce1,
            1 => ChipSelect::Ce2,
            // DisplayId never exceeds NUMBER_OF_DISPLAYS, pinned to 2 above
            _ => unreachable!(),
        }
    }

    /// Chip enable for a raw display number, `None` if nothing is wired
    pub fn from_number(number: u8) -> Option<Self> {
        DisplayId::new(number).ok().map(Self::for_display)
    }

    /// Expander line of this chip enable
    pub const fn line(self) -> u8 {
        match self {
            ChipSelect::Ce1 => HDSP_CE1,
            ChipSelect::Ce2 => HDSP_CE2,
        }
    }
}

/// Pin-level writer for HDSP-2111 displays behind a port expander
pub struct BusWriter<E, D> {
    expander: E,
    delay: D,
}

impl<E: PortExpander, D: DelayNs> BusWriter<E, D> {
    /// Create a new bus writer
    pub fn new(expander: E, delay: D) -> Self {
        Self { expander, delay }
    }

    /// Start the expander at `address`, make every line an output and
    /// park the strobes
    ///
    /// Both chip enables and WR are driven high first so nothing is
    /// written while the address and data ports still hold garbage.
    pub fn initialize(&mut self, address: u8) {
        self.expander.begin(address);
        self.expander.set_direction(ALL_OUTPUTS);
        self.expander.set_high(HDSP_CE1);
        self.expander.set_high(HDSP_CE2);
        self.expander.set_high(HDSP_WR);
    }

    /// Write one character code to a cell (0-7)
    ///
    /// Only A2:A0 reach the chip, so in release builds a cell past 7 wraps
    /// onto `cell % 8`.
    pub fn write_character_cell(&mut self, chip: ChipSelect, cell: u8, code: u8) {
        debug_assert!((cell as usize) < CELLS, "cell {} out of range", cell);
        let address = CONTROL_IDLE | CHARACTER_RAM | (cell & CELL_MASK);
        self.expander.write_port(ADDRESS_PORT, address);
        self.expander.write_port(DATA_PORT, code);
        self.settle();

        self.expander.set_low(chip.line());
        self.settle();
        self.expander.set_low(HDSP_WR);
        self.settle();
        // CE is released before WR for character RAM
        self.expander.set_high(chip.line());
        self.settle();
        self.expander.set_high(HDSP_WR);
        self.settle();
    }

    /// Write all 8 cells, left to right
    pub fn write_window(&mut self, chip: ChipSelect, window: &Window) {
        for (cell, &code) in window.iter().enumerate() {
            self.write_character_cell(chip, cell as u8, code);
        }
    }

    /// Write the control word register
    pub fn write_control_register(&mut self, chip: ChipSelect, word: ControlWord) {
        self.expander.write_port(ADDRESS_PORT, CONTROL_IDLE);
        self.expander.write_port(DATA_PORT, word.bits());
        self.settle();

        self.expander.set_low(chip.line());
        self.settle();
        self.expander.set_low(HDSP_WR);
        self.settle();
        self.expander.set_high(HDSP_WR);
        self.settle();
        self.expander.set_high(chip.line());
        self.settle();
    }

    /// Reset the control word: full brightness, no blink, no flash
    pub fn clear_control_word(&mut self, chip: ChipSelect) {
        self.write_control_register(chip, ControlWord::CLEARED);
    }

    /// Read back the control word register
    ///
    /// The data port is always returned to output before this returns.
    pub fn read_control_register(&mut self, chip: ChipSelect) -> ControlWord {
        self.expander.set_port_direction(DATA_PORT, PORT_INPUT);
        self.expander.write_port(ADDRESS_PORT, CONTROL_IDLE);
        // Clearing the output latch avoids stale readbacks
        self.expander.write_port(DATA_PORT, 0x00);

        self.expander.set_low(chip.line());
        self.settle();
        self.expander.set_low(HDSP_RD);
        self.delay.delay_ms(READ_SETTLE_MS);

        // Sample while RD is still asserted
        let _ = self.expander.read_port(DATA_PORT);
        let bits = self.expander.read_port(DATA_PORT);

        self.expander.set_high(HDSP_RD);
        self.settle();
        self.expander.set_high(chip.line());
        self.settle();

        self.expander.set_port_direction(DATA_PORT, PORT_OUTPUT);
        ControlWord::from_bits(bits)
    }

    /// Read the control word of a raw display number
    ///
    /// Unknown display numbers return `invalid` without touching the bus.
    pub fn read_control_register_for(&mut self, display: u8, invalid: u8) -> u8 {
        match ChipSelect::from_number(display) {
            Some(chip) => self.read_control_register(chip).bits(),
            None => invalid,
        }
    }

    /// Block for `ms` milliseconds using the bus delay
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Get access to the underlying expander
    pub fn expander(&self) -> &E {
        &self.expander
    }

    /// Release the expander and delay
    pub fn release(self) -> (E, D) {
        (self.expander, self.delay)
    }

    fn settle(&mut self) {
        self.delay.delay_ms(SETTLE_MS);
    }
}
