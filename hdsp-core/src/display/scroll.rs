//! Scroll timing

use super::Window;

/// Delay between scroll steps when nothing else is configured
pub const DEFAULT_SCROLL_DELAY_MS: u16 = 120;

/// Scroll delay per speed level, fastest first
///
/// Level 3 matches the default. Writing one window costs 40 ms of bus
/// pacing, so levels 0 and 1 are limited by the bus rather than the table.
pub const SCROLL_SPEED_TABLE_MS: [u16; 8] = [20, 40, 80, 120, 160, 200, 240, 300];

/// Scroll delay for a speed level (0-7)
///
/// Levels outside the table fall back to the default delay.
pub fn scroll_delay_for_speed(level: u8) -> u16 {
    SCROLL_SPEED_TABLE_MS
        .get(level as usize)
        .copied()
        .unwrap_or(DEFAULT_SCROLL_DELAY_MS)
}

/// Outcome of one scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollStep {
    /// Scroll already finished; nothing to write
    Complete,
    /// Scroll delay has not elapsed yet
    Waiting,
    /// Write this window; the scroll position has advanced
    Advance(Window),
    /// Write this blank window; the scroll just finished
    Finish(Window),
}

impl ScrollStep {
    /// Window to push to the display, if any
    pub fn window(&self) -> Option<&Window> {
        match self {
            ScrollStep::Advance(window) | ScrollStep::Finish(window) => Some(window),
            ScrollStep::Complete | ScrollStep::Waiting => None,
        }
    }
}
