//! Port expander to HDSP-2111 wiring
//!
//! Port A carries the address and control lines, port B the data bus.
//! A4 is tied high on the board, so A3 alone selects between character
//! RAM (high) and the control word register (low).

use hdsp_hal::Port;

pub const HDSP_A0: u8 = 0;
pub const HDSP_A1: u8 = 1;
pub const HDSP_A2: u8 = 2;
pub const HDSP_A3: u8 = 3;
/// Read strobe, active low
pub const HDSP_RD: u8 = 4;
/// Write strobe, active low
pub const HDSP_WR: u8 = 5;
/// Chip enable of display 1, active low
pub const HDSP_CE1: u8 = 6;
/// Chip enable of display 2, active low
pub const HDSP_CE2: u8 = 7;

pub const HDSP_D0: u8 = 8;
pub const HDSP_D7: u8 = 15;

/// Port holding A0-A3, RD, WR, CE1, CE2
pub const ADDRESS_PORT: Port = Port::A;
/// Port holding D0-D7
pub const DATA_PORT: Port = Port::B;

/// RD, WR, CE1 and CE2 all released (high)
pub const CONTROL_IDLE: u8 = 0xF0;
/// A3 high: address selects character RAM
pub const CHARACTER_RAM: u8 = 1 << HDSP_A3;
/// A0-A2: character cell within the RAM
pub const CELL_MASK: u8 = 0x07;

/// Direction mask with every expander line as output
pub const ALL_OUTPUTS: u16 = 0x0000;
/// Port direction mask for an input port
pub const PORT_INPUT: u8 = 0xFF;
/// Port direction mask for an output port
pub const PORT_OUTPUT: u8 = 0x00;
