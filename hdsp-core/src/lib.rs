//! Board-agnostic core logic for HDSP-2111 display controllers
//!
//! This crate contains all display logic that does not depend on
//! a specific bus or port expander:
//!
//! - Display identifiers and the per-display state record
//! - Scroll window rendering and scroll speed table
//! - Control register bit layout and brightness levels
//! - Display state classification
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod control;
pub mod display;
pub mod error;

pub use config::ControllerConfig;
pub use control::{Brightness, ControlWord};
pub use display::{
    DisplayId, DisplayState, DisplayUnit, ScrollStep, Window, CELLS, MAX_TEXT_LEN,
    NUMBER_OF_DISPLAYS,
};
pub use error::DisplayError;
