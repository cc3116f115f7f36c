//! HDSP-2111 control word register
//!
//! # Bit layout
//!
//! | Bit   | Meaning                                   |
//! |-------|-------------------------------------------|
//! | D7    | 1 = clear flash and character RAM         |
//! | D6    | 1 = start self test (result lands in D5)  |
//! | D5    | self test result, 1 = passed              |
//! | D4    | 1 = blinking enabled                      |
//! | D3    | 1 = flash enabled                         |
//! | D2:D0 | brightness, 0b000 = 100% .. 0b111 = 0%    |

use crate::error::DisplayError;

/// Brightness bits D2:D0
pub const BRIGHTNESS_MASK: u8 = 0x07;
/// Flash enable
pub const FLASH: u8 = 0x08;
/// Blink enable
pub const BLINK: u8 = 0x10;
/// Self test passed (read only)
pub const SELF_TEST_PASSED: u8 = 0x20;
/// Start self test
pub const START_SELF_TEST: u8 = 0x40;
/// Clear flash and character RAM
pub const CLEAR: u8 = 0x80;

/// Level that blanks the display; never written
pub const BRIGHTNESS_OFF: u8 = 7;

/// Raw control word as latched by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord(u8);

impl ControlWord {
    /// All bits clear: full brightness, no blink/flash
    pub const CLEARED: Self = Self(0x00);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Raw brightness level in D2:D0
    pub const fn brightness_level(self) -> u8 {
        self.0 & BRIGHTNESS_MASK
    }

    /// Replace the brightness bits, leaving D7:D3 untouched
    pub const fn with_brightness(self, brightness: Brightness) -> Self {
        Self((self.0 & !BRIGHTNESS_MASK) | brightness.level())
    }

    pub const fn blink_enabled(self) -> bool {
        self.0 & BLINK != 0
    }

    pub const fn flash_enabled(self) -> bool {
        self.0 & FLASH != 0
    }

    pub const fn self_test_passed(self) -> bool {
        self.0 & SELF_TEST_PASSED != 0
    }
}

/// Writable brightness level (0 = 100% .. 6 = 13%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

/// Nominal intensity per level, from the datasheet
const LEVEL_PERCENT: [u8; 8] = [100, 80, 53, 40, 27, 20, 13, 0];

impl Brightness {
    /// 100% intensity
    pub const FULL: Self = Self(0);
    /// Dimmest level that still shows characters
    pub const DIMMEST: Self = Self(BRIGHTNESS_OFF - 1);

    /// Validate a 3-bit level; level 7 (off) and above are rejected
    pub const fn new(level: u8) -> Result<Self, DisplayError> {
        if level >= BRIGHTNESS_OFF {
            Err(DisplayError::BrightnessOutOfRange(level))
        } else {
            Ok(Self(level))
        }
    }

    /// Map an intensity percentage onto the nearest datasheet level
    ///
    /// Anything below 7% maps to "off" and is therefore rejected.
    pub const fn from_percent(percent: u8) -> Result<Self, DisplayError> {
        Self::new(level_for_percent(percent))
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    /// Nominal intensity of this level in percent
    pub const fn percent(self) -> u8 {
        LEVEL_PERCENT[self.0 as usize]
    }
}

impl TryFrom<u8> for Brightness {
    type Error = DisplayError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

/// Raw 3-bit level for a percentage, including 7 (off)
pub const fn level_for_percent(percent: u8) -> u8 {
    match percent {
        0..=6 => 7,
        7..=15 => 6,
        16..=24 => 5,
        25..=34 => 4,
        35..=46 => 3,
        47..=61 => 2,
        62..=90 => 1,
        _ => 0,
    }
}
