//! Per-display state record

use heapless::String;

use super::scroll::{ScrollStep, DEFAULT_SCROLL_DELAY_MS};
use super::state::DisplayState;
use super::{render_window, Window, BLANK, BLANK_WINDOW, CELLS, MAX_TEXT_LEN};
use crate::control::Brightness;

/// Text, scroll and timing state of one physical display
///
/// `text_length` caches the length of `text`. The two only disagree on a
/// freshly constructed unit, which tells the controller to resynchronise
/// before the first push.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayUnit {
    /// Current text, may be longer than the window
    text: String<MAX_TEXT_LEN>,
    /// Cached length of `text` in bytes
    text_length: usize,
    /// Index of the leftmost windowed character; `text_length` = finished
    scroll_position: usize,
    /// Minimum time between scroll steps
    scroll_delay_ms: u16,
    /// Timestamp of the last scroll step, reset or setup
    last_update_ms: u32,
    /// Text has been pushed fully off-screen
    scroll_complete: bool,
    /// Text assigned since the last push
    text_changed: bool,
    /// Last brightness written to the control register
    brightness: Brightness,
}

impl Default for DisplayUnit {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_DELAY_MS)
    }
}

impl DisplayUnit {
    /// Create a blank unit with the given scroll delay
    pub fn new(scroll_delay_ms: u16) -> Self {
        let mut text = String::new();
        let _ = text.push_str(BLANK);
        Self {
            text,
            // Deliberately stale, see the type docs
            text_length: 0,
            scroll_position: 0,
            scroll_delay_ms,
            last_update_ms: 0,
            scroll_complete: false,
            text_changed: false,
            brightness: Brightness::FULL,
        }
    }

    /// Assign text, keeping the scroll position if the length is unchanged
    ///
    /// Returns `true` if the assignment restarted the scroll.
    pub fn set_text(&mut self, text: &str) -> bool {
        let text = truncate(text);
        if text.len() == self.text_length {
            self.store(text);
            self.text_changed = true;
            false
        } else {
            self.set_text_as_new(text);
            true
        }
    }

    /// Assign text and restart the scroll from the first character
    pub fn set_text_as_new(&mut self, text: &str) {
        let text = truncate(text);
        self.store(text);
        self.text_length = text.len();
        self.scroll_position = 0;
        self.scroll_complete = false;
        self.text_changed = true;
    }

    /// Check if the cached length disagrees with the stored text
    pub fn needs_resync(&self) -> bool {
        self.text_length != self.text.len()
    }

    /// Re-run the new-text path on the stored text
    pub fn resync(&mut self) {
        self.text_length = self.text.len();
        self.scroll_position = 0;
        self.scroll_complete = false;
        self.text_changed = true;
    }

    /// Return to the blank state and stamp the update time
    pub fn reset(&mut self, now_ms: u32) {
        self.store(BLANK);
        self.text_length = CELLS;
        self.scroll_position = 0;
        self.scroll_complete = false;
        self.text_changed = false;
        self.last_update_ms = now_ms;
    }

    /// Window for a static (non-scrolling) refresh
    ///
    /// Clears a stale complete flag; short text never finishes scrolling.
    pub fn static_window(&mut self) -> Window {
        self.scroll_complete = false;
        render_window(self.text.as_bytes(), 0)
    }

    /// Advance the scroll if the delay has elapsed
    pub fn scroll_step(&mut self, now_ms: u32) -> ScrollStep {
        if self.scroll_complete {
            return ScrollStep::Complete;
        }

        let elapsed = now_ms.wrapping_sub(self.last_update_ms);
        if elapsed < u32::from(self.scroll_delay_ms) {
            return ScrollStep::Waiting;
        }
        self.last_update_ms = now_ms;

        if self.scroll_position >= self.text_length {
            // Start index is at the end marker; push the tail off-screen
            self.scroll_complete = true;
            ScrollStep::Finish(BLANK_WINDOW)
        } else {
            let window = render_window(self.text.as_bytes(), self.scroll_position);
            self.scroll_position += 1;
            ScrollStep::Advance(window)
        }
    }

    /// Restart a finished scroll from the first character
    ///
    /// Returns `true` if the unit was finished.
    pub fn restart_if_complete(&mut self) -> bool {
        if self.scroll_complete {
            self.scroll_complete = false;
            self.scroll_position = 0;
            true
        } else {
            false
        }
    }

    /// Mark the current text as pushed
    pub fn mark_clean(&mut self) {
        self.text_changed = false;
    }

    /// Stamp the last update time
    pub fn touch(&mut self, now_ms: u32) {
        self.last_update_ms = now_ms;
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn text_length(&self) -> usize {
        self.text_length
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    /// Move the scroll position, clamped to the end marker
    pub fn set_scroll_position(&mut self, position: usize) {
        self.scroll_position = position.min(self.text_length);
    }

    pub fn scroll_delay_ms(&self) -> u16 {
        self.scroll_delay_ms
    }

    pub fn set_scroll_delay_ms(&mut self, delay_ms: u16) {
        self.scroll_delay_ms = delay_ms;
    }

    pub fn last_update_ms(&self) -> u32 {
        self.last_update_ms
    }

    pub fn is_scroll_complete(&self) -> bool {
        self.scroll_complete
    }

    pub fn set_scroll_complete(&mut self, complete: bool) {
        self.scroll_complete = complete;
    }

    pub fn is_text_changed(&self) -> bool {
        self.text_changed
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    /// Check if the text is longer than the window
    pub fn is_scrolling(&self) -> bool {
        self.text_length > CELLS
    }

    pub fn state(&self) -> DisplayState {
        DisplayState::classify(self.text_length, self.text_changed, self.scroll_complete)
    }

    fn store(&mut self, text: &str) {
        self.text.clear();
        // Cannot fail: callers pass text already truncated to capacity
        let _ = self.text.push_str(text);
    }
}

/// Cut `text` to the unit capacity on a character boundary
fn truncate(text: &str) -> &str {
    if text.len() <= MAX_TEXT_LEN {
        return text;
    }
    let mut end = MAX_TEXT_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
