//! Validation errors
//!
//! The bus to the displays has no acknowledgment channel, so the only
//! detectable failures are bad arguments from the caller.

use core::fmt;

/// Errors raised while validating caller input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Display number outside 1..=NUMBER_OF_DISPLAYS
    InvalidDisplayId(u8),
    /// Brightness level 7 (display off) or above
    BrightnessOutOfRange(u8),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::InvalidDisplayId(id) => write!(f, "invalid display id {}", id),
            DisplayError::BrightnessOutOfRange(level) => {
                write!(f, "brightness level {} out of range", level)
            }
        }
    }
}
