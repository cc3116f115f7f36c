//! Display state classification

use super::CELLS;

/// What the controller will do with a display on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Fits in the window, unchanged since the last push
    StaticClean,
    /// Fits in the window, changed since the last push
    StaticDirty,
    /// Longer than the window, still scrolling
    ScrollingActive,
    /// Longer than the window, pushed fully off-screen
    ScrollingDone,
}

impl DisplayState {
    /// Classify from the unit's length and flags
    pub const fn classify(text_length: usize, text_changed: bool, scroll_complete: bool) -> Self {
        if text_length <= CELLS {
            if text_changed {
                DisplayState::StaticDirty
            } else {
                DisplayState::StaticClean
            }
        } else if scroll_complete {
            DisplayState::ScrollingDone
        } else {
            DisplayState::ScrollingActive
        }
    }

    /// Check if the text is longer than the window
    pub const fn is_scrolling(&self) -> bool {
        matches!(self, DisplayState::ScrollingActive | DisplayState::ScrollingDone)
    }
}
