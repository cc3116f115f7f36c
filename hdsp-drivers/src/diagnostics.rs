//! Diagnostic dump of per-display state

use core::fmt;

use embedded_hal::delay::DelayNs;
use hdsp_core::control::Brightness;
use hdsp_core::display::DisplayId;
use hdsp_hal::{Clock, PortExpander};

use crate::controller::DisplayController;

/// Point-in-time copy of one display's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplaySnapshot<'a> {
    /// 1-based display number
    pub display: u8,
    pub text: &'a str,
    pub last_update_ms: u32,
    pub text_length: usize,
    pub scroll_position: usize,
    pub scroll_delay_ms: u16,
    pub scroll_complete: bool,
    pub text_changed: bool,
    pub brightness: Brightness,
}

impl fmt::Display for DisplaySnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "display {}", self.display)?;
        writeln!(f, "  text:            \"{}\"", self.text)?;
        writeln!(f, "  last update:     {} ms", self.last_update_ms)?;
        writeln!(f, "  text length:     {}", self.text_length)?;
        writeln!(f, "  scroll position: {}", self.scroll_position)?;
        writeln!(f, "  scroll delay:    {} ms", self.scroll_delay_ms)?;
        writeln!(f, "  scroll complete: {}", self.scroll_complete)?;
        writeln!(f, "  text changed:    {}", self.text_changed)?;
        write!(
            f,
            "  brightness:      {} ({}%)",
            self.brightness.level(),
            self.brightness.percent()
        )
    }
}

impl<E: PortExpander, D: DelayNs, C: Clock> DisplayController<E, D, C> {
    /// Snapshot every display, in display-number order
    pub fn snapshots(&self) -> impl Iterator<Item = DisplaySnapshot<'_>> + '_ {
        DisplayId::all().map(move |id| {
            let unit = &self.units[id.index()];
            DisplaySnapshot {
                display: id.number(),
                text: unit.text(),
                last_update_ms: unit.last_update_ms(),
                text_length: unit.text_length(),
                scroll_position: unit.scroll_position(),
                scroll_delay_ms: unit.scroll_delay_ms(),
                scroll_complete: unit.is_scroll_complete(),
                text_changed: unit.is_text_changed(),
                brightness: unit.brightness(),
            }
        })
    }

    /// Write a human-readable dump of every display
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for snapshot in self.snapshots() {
            writeln!(out, "{}", snapshot)?;
        }
        Ok(())
    }

    /// Log every display's state
    #[cfg(feature = "defmt")]
    pub fn log_state(&self) {
        for snapshot in self.snapshots() {
            defmt::info!("{}", snapshot);
        }
    }
}
