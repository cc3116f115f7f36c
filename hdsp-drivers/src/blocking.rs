//! Blocking scroll helper
//!
//! Runs a whole scroll inside one call. The controller is held for the
//! duration and the call cannot be cancelled, so this is only suitable
//! for start-up banners and similar one-shot messages. Control loops
//! should use [`DisplayController::go_dog_go`] instead.

use embedded_hal::delay::DelayNs;
use hdsp_core::display::render_window;
use hdsp_hal::{Clock, PortExpander};

use crate::bus::ChipSelect;
use crate::controller::{resolve, DisplayController};

/// Pause between windows of a blocking scroll (ms)
pub const BLOCKING_SCROLL_STEP_MS: u32 = 100;

impl<E: PortExpander, D: DelayNs, C: Clock> DisplayController<E, D, C> {
    /// Scroll `text` across a display, sleeping between windows
    ///
    /// Every window from the first character up to and including the
    /// all-blank one is written. The display's stored text and scroll
    /// position are left alone; only its update time is stamped when
    /// the scroll finishes.
    pub fn scroll_blocking(&mut self, text: &str, display: u8) {
        let Some(id) = resolve(display) else {
            return;
        };
        let chip = ChipSelect::for_display(id);
        let bytes = text.as_bytes();

        for start in 0..=bytes.len() {
            let window = render_window(bytes, start);
            self.bus.write_window(chip, &window);
            self.bus.delay_ms(BLOCKING_SCROLL_STEP_MS);
        }

        let now = self.clock.now_ms();
        self.units[id.index()].touch(now);
    }
}
