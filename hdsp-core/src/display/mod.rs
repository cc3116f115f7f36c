//! Per-display state and scroll rendering
//!
//! Every physical display is one [`DisplayUnit`] addressed by a validated
//! [`DisplayId`]. Units never touch hardware themselves; they decide what
//! the 8 cells should show and hand the caller a [`Window`] to write.

pub mod scroll;
pub mod state;
pub mod unit;

pub use scroll::{scroll_delay_for_speed, ScrollStep, DEFAULT_SCROLL_DELAY_MS, SCROLL_SPEED_TABLE_MS};
pub use state::DisplayState;
pub use unit::DisplayUnit;

use crate::error::DisplayError;

/// Character cells per display
pub const CELLS: usize = 8;

/// Displays served by one controller (one per chip-select line)
pub const NUMBER_OF_DISPLAYS: usize = 2;

/// Longest text a unit stores, in bytes; longer text is truncated
pub const MAX_TEXT_LEN: usize = 255;

/// Eight blank cells
pub const BLANK: &str = "        ";

/// One frame of cell contents, cell 0 leftmost
pub type Window = [u8; CELLS];

/// An all-blank window
pub const BLANK_WINDOW: Window = [b' '; CELLS];

/// Validated display identifier
///
/// Display numbers are 1-based on the public API (matching the CE1/CE2
/// lines); internally the id is a 0-based index into the unit array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayId(u8);

impl DisplayId {
    /// Resolve a 1-based display number
    pub const fn new(number: u8) -> Result<Self, DisplayError> {
        if number >= 1 && (number as usize) <= NUMBER_OF_DISPLAYS {
            Ok(Self(number - 1))
        } else {
            Err(DisplayError::InvalidDisplayId(number))
        }
    }

    /// 1-based display number
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// 0-based index into the unit array
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every valid display, in order
    pub fn all() -> impl Iterator<Item = DisplayId> {
        (0..NUMBER_OF_DISPLAYS as u8).map(DisplayId)
    }
}

impl TryFrom<u8> for DisplayId {
    type Error = DisplayError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

/// Render the 8 cells starting at `start`
///
/// Cells past the end of `text` are filled with spaces; `text` is never
/// indexed past its end.
pub fn render_window(text: &[u8], start: usize) -> Window {
    let mut window = BLANK_WINDOW;
    if let Some(rest) = text.get(start..) {
        let len = rest.len().min(CELLS);
        window[..len].copy_from_slice(&rest[..len]);
    }
    window
}
