//! Display controller
//!
//! Owns the state of every display and turns it into bus traffic. The
//! controller is polled: call [`DisplayController::go_dog_go`] once per
//! control-loop iteration and it refreshes short text and advances
//! scrolling text at most once per scroll delay.
//!
//! Display numbers on this API are 1-based. Invalid numbers and
//! brightness levels are ignored rather than reported; queries return a
//! blank or `None` result instead.

use embedded_hal::delay::DelayNs;
use hdsp_core::config::ControllerConfig;
use hdsp_core::control::{Brightness, ControlWord};
use hdsp_core::display::{
    render_window, scroll_delay_for_speed, DisplayId, DisplayState, DisplayUnit, ScrollStep, BLANK,
    BLANK_WINDOW, NUMBER_OF_DISPLAYS,
};
use hdsp_core::DisplayError;
use hdsp_hal::{Clock, PortExpander};

use crate::bus::{BusWriter, ChipSelect};

/// Controller for up to two HDSP-2111 displays
pub struct DisplayController<E, D, C> {
    pub(crate) bus: BusWriter<E, D>,
    pub(crate) clock: C,
    pub(crate) config: ControllerConfig,
    pub(crate) units: [DisplayUnit; NUMBER_OF_DISPLAYS],
}

impl<E: PortExpander, D: DelayNs, C: Clock> DisplayController<E, D, C> {
    /// Create a new controller
    ///
    /// No bus traffic happens until [`setup`](Self::setup) is called.
    pub fn new(expander: E, delay: D, clock: C, config: ControllerConfig) -> Self {
        let config = config.validated();
        Self {
            bus: BusWriter::new(expander, delay),
            clock,
            units: core::array::from_fn(|_| DisplayUnit::new(config.default_scroll_delay_ms)),
            config,
        }
    }

    /// Configure the expander and stamp every display's update time
    pub fn setup(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "HDSP setup, expander address {}",
            self.config.expander_address
        );

        self.bus.initialize(self.config.expander_address);
        let now = self.clock.now_ms();
        for unit in &mut self.units {
            unit.touch(now);
        }

        if let Some(brightness) = self.config.initial_brightness() {
            for id in DisplayId::all() {
                self.apply_brightness(id, brightness);
            }
        }
    }

    /// Restart finished scrolls, then refresh every display
    ///
    /// This is the one call most control loops need per iteration.
    pub fn go_dog_go(&mut self) {
        self.auto_reset_scrolls();
        self.tick();
    }

    /// Refresh every display
    ///
    /// Short text is rewritten on every call; long text advances one
    /// scroll step once its delay has elapsed.
    pub fn tick(&mut self) {
        for id in DisplayId::all() {
            self.refresh(id);
        }
    }

    /// Refresh a single display
    pub fn update_display(&mut self, display: u8) {
        if let Some(id) = resolve(display) {
            self.refresh(id);
        }
    }

    /// Advance the scroll of a single display if its delay has elapsed
    pub fn update_scroll(&mut self, display: u8) {
        if let Some(id) = resolve(display) {
            self.scroll(id);
        }
    }

    /// Blank every display
    pub fn reset_displays(&mut self) {
        for id in DisplayId::all() {
            self.reset(id);
        }
    }

    /// Blank a display, clear its control word and forget its text
    pub fn reset_display(&mut self, display: u8) {
        if let Some(id) = resolve(display) {
            self.reset(id);
        }
    }

    /// Assign text, keeping the scroll position if the length is unchanged
    ///
    /// Useful for editing a character of text that is mid-scroll.
    pub fn set_display_string(&mut self, text: &str, display: u8) {
        if let Some(id) = resolve(display) {
            self.units[id.index()].set_text(text);
        }
    }

    /// Assign text and restart the scroll from the first character
    pub fn set_display_string_as_new(&mut self, text: &str, display: u8) {
        if let Some(id) = resolve(display) {
            self.units[id.index()].set_text_as_new(text);
        }
    }

    /// Current text of a display, or eight blanks for an invalid number
    pub fn display_string(&self, display: u8) -> &str {
        match DisplayId::new(display) {
            Ok(id) => self.units[id.index()].text(),
            Err(_) => BLANK,
        }
    }

    /// Write text straight to a display without touching its state
    ///
    /// The text is cut or padded to 8 cells. The next tick overwrites it.
    pub fn write_display(&mut self, text: &str, display: u8) {
        if let Some(id) = resolve(display) {
            let window = render_window(text.as_bytes(), 0);
            self.bus.write_window(ChipSelect::for_display(id), &window);
        }
    }

    /// Set the delay between scroll steps
    pub fn set_scroll_delay(&mut self, delay_ms: u16, display: u8) {
        if let Some(id) = resolve(display) {
            self.units[id.index()].set_scroll_delay_ms(delay_ms);
        }
    }

    /// Set the delay between scroll steps on every display
    pub fn set_scroll_delay_all(&mut self, delay_ms: u16) {
        for unit in &mut self.units {
            unit.set_scroll_delay_ms(delay_ms);
        }
    }

    /// Set the scroll speed level (0 fastest .. 7 slowest)
    pub fn set_scroll_speed(&mut self, level: u8, display: u8) {
        self.set_scroll_delay(scroll_delay_for_speed(level), display);
    }

    /// Set the scroll speed level on every display
    pub fn set_scroll_speed_all(&mut self, level: u8) {
        self.set_scroll_delay_all(scroll_delay_for_speed(level));
    }

    /// Set brightness (0 = 100% .. 6 = 13%), keeping blink/flash bits
    ///
    /// Level 7 would blank the display and is ignored.
    pub fn set_brightness(&mut self, level: u8, display: u8) {
        let Some(brightness) = validate_brightness(level) else {
            return;
        };
        if let Some(id) = resolve(display) {
            self.apply_brightness(id, brightness);
        }
    }

    /// Set brightness on every display
    pub fn set_brightness_all(&mut self, level: u8) {
        let Some(brightness) = validate_brightness(level) else {
            return;
        };
        for id in DisplayId::all() {
            self.apply_brightness(id, brightness);
        }
    }

    /// Set brightness from an intensity percentage
    pub fn set_brightness_percent(&mut self, percent: u8, display: u8) {
        self.set_brightness(hdsp_core::control::level_for_percent(percent), display);
    }

    /// Set brightness from an intensity percentage on every display
    pub fn set_brightness_percent_all(&mut self, percent: u8) {
        self.set_brightness_all(hdsp_core::control::level_for_percent(percent));
    }

    /// Reset the control word: full brightness, blink and flash off
    pub fn clear_control_word(&mut self, display: u8) {
        if let Some(id) = resolve(display) {
            self.bus.clear_control_word(ChipSelect::for_display(id));
            self.units[id.index()].set_brightness(Brightness::FULL);
        }
    }

    /// Read back a display's control word
    pub fn control_register(&mut self, display: u8) -> Option<ControlWord> {
        let id = resolve(display)?;
        Some(self.bus.read_control_register(ChipSelect::for_display(id)))
    }

    /// Check if a display has scrolled its text fully off-screen
    pub fn is_scroll_complete(&self, display: u8) -> bool {
        DisplayId::new(display)
            .map(|id| self.units[id.index()].is_scroll_complete())
            .unwrap_or(false)
    }

    /// Override the scroll-complete flag
    pub fn set_scroll_complete(&mut self, complete: bool, display: u8) {
        if let Some(id) = resolve(display) {
            self.units[id.index()].set_scroll_complete(complete);
        }
    }

    /// Override the scroll position (clamped to the end of the text)
    pub fn set_scroll_position(&mut self, position: usize, display: u8) {
        if let Some(id) = resolve(display) {
            self.units[id.index()].set_scroll_position(position);
        }
    }

    /// Restart a finished scroll from the first character
    pub fn auto_reset_scroll(&mut self, display: u8) {
        if let Some(id) = resolve(display) {
            self.units[id.index()].restart_if_complete();
        }
    }

    /// Restart every finished scroll
    pub fn auto_reset_scrolls(&mut self) {
        for unit in &mut self.units {
            unit.restart_if_complete();
        }
    }

    /// What the next tick will do with a display
    pub fn state(&self, display: u8) -> Option<DisplayState> {
        self.unit(display).map(DisplayUnit::state)
    }

    /// Read-only view of a display's state
    pub fn unit(&self, display: u8) -> Option<&DisplayUnit> {
        DisplayId::new(display).ok().map(|id| &self.units[id.index()])
    }

    /// Get the configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Get access to the bus writer
    pub fn bus(&self) -> &BusWriter<E, D> {
        &self.bus
    }

    /// Get access to the clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Release the hardware
    pub fn release(self) -> (E, D, C) {
        let (expander, delay) = self.bus.release();
        (expander, delay, self.clock)
    }

    fn refresh(&mut self, id: DisplayId) {
        let unit = &mut self.units[id.index()];
        if unit.needs_resync() {
            unit.resync();
        }

        if unit.is_scrolling() {
            self.scroll(id);
        } else {
            let window = unit.static_window();
            self.bus.write_window(ChipSelect::for_display(id), &window);
        }
        self.units[id.index()].mark_clean();
    }

    fn scroll(&mut self, id: DisplayId) {
        let now = self.clock.now_ms();
        let step = self.units[id.index()].scroll_step(now);
        if let Some(window) = step.window() {
            self.bus.write_window(ChipSelect::for_display(id), window);
        }

        if let ScrollStep::Finish(_) = step {
            #[cfg(feature = "defmt")]
            defmt::trace!("display {} scroll complete", id.number());
        }
    }

    fn reset(&mut self, id: DisplayId) {
        #[cfg(feature = "defmt")]
        defmt::debug!("reset display {}", id.number());

        let now = self.clock.now_ms();
        let chip = ChipSelect::for_display(id);
        let unit = &mut self.units[id.index()];
        unit.reset(now);
        unit.set_brightness(Brightness::FULL);
        self.bus.write_window(chip, &BLANK_WINDOW);
        self.bus.clear_control_word(chip);
    }

    fn apply_brightness(&mut self, id: DisplayId, brightness: Brightness) {
        let chip = ChipSelect::for_display(id);
        let word = self.bus.read_control_register(chip).with_brightness(brightness);
        self.bus.write_control_register(chip, word);
        self.units[id.index()].set_brightness(brightness);
    }
}

/// Resolve a display number, logging and discarding invalid ones
pub(crate) fn resolve(display: u8) -> Option<DisplayId> {
    match DisplayId::new(display) {
        Ok(id) => Some(id),
        Err(err) => {
            report(err);
            None
        }
    }
}

fn validate_brightness(level: u8) -> Option<Brightness> {
    match Brightness::new(level) {
        Ok(brightness) => Some(brightness),
        Err(err) => {
            report(err);
            None
        }
    }
}

#[cfg(feature = "defmt")]
fn report(err: DisplayError) {
    defmt::warn!("ignored: {}", err);
}

#[cfg(not(feature = "defmt"))]
fn report(_err: DisplayError) {}
