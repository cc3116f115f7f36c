//! HDSP-2111 display drivers
//!
//! This crate drives up to two HDSP-2111 8-character alphanumeric displays
//! wired to a 16-line GPIO port expander:
//!
//! - [`bus::BusWriter`] - pin-level write/read protocol with settling delays
//! - [`controller::DisplayController`] - per-display text and scroll state,
//!   driven by a polled `tick`
//! - [`pins`] - expander line assignments
//! - [`blocking`] - one-shot scroll that sleeps through the whole message
//! - [`diagnostics`] - per-display snapshots and a text dump
//!
//! # Usage
//!
//! ```ignore
//! let mut displays = DisplayController::new(expander, delay, clock, ControllerConfig::default());
//! displays.setup();
//! displays.set_display_string_as_new("HELLO WORLD, SCROLLING", 1);
//! displays.set_display_string("STATIC", 2);
//!
//! loop {
//!     displays.go_dog_go();
//!     // ... rest of the control loop
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod blocking;
pub mod bus;
pub mod controller;
pub mod diagnostics;
pub mod pins;

#[cfg(test)]
pub(crate) mod mock;

pub use bus::{BusWriter, ChipSelect};
pub use controller::DisplayController;
pub use diagnostics::DisplaySnapshot;
