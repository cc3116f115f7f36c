//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::Brightness;
use crate::display::DEFAULT_SCROLL_DELAY_MS;

/// Highest hardware address selectable on the expander (A2:A0 pins)
pub const MAX_EXPANDER_ADDRESS: u8 = 7;

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Hardware address of the port expander (0-7)
    pub expander_address: u8,
    /// Scroll delay applied to every display at construction
    pub default_scroll_delay_ms: u16,
    /// Brightness level applied to every display during setup (0-6)
    pub initial_brightness: Option<u8>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            expander_address: 0,
            default_scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            initial_brightness: None,
        }
    }
}

impl ControllerConfig {
    pub const fn with_expander_address(mut self, address: u8) -> Self {
        self.expander_address = address;
        self
    }

    pub const fn with_scroll_delay(mut self, delay_ms: u16) -> Self {
        self.default_scroll_delay_ms = delay_ms;
        self
    }

    pub const fn with_initial_brightness(mut self, level: u8) -> Self {
        self.initial_brightness = Some(level);
        self
    }

    /// Clamp the address to the expander range and drop a brightness
    /// level that would blank the displays
    pub fn validated(self) -> Self {
        Self {
            expander_address: self.expander_address.min(MAX_EXPANDER_ADDRESS),
            default_scroll_delay_ms: self.default_scroll_delay_ms,
            initial_brightness: self
                .initial_brightness
                .filter(|&level| Brightness::new(level).is_ok()),
        }
    }

    /// Initial brightness as a validated level
    pub fn initial_brightness(&self) -> Option<Brightness> {
        self.initial_brightness
            .and_then(|level| Brightness::new(level).ok())
    }
}
