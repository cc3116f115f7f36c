//! HDSP Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the display controller
//! consumes. A board supplies a port-expander driver and a clock; the
//! controller never touches registers or timers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (control loop)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hdsp-drivers (bus + controller)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hdsp-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ port expander │       │ clock / delay │
//! │    driver     │       │   (board)     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`expander::PortExpander`] - 16-line GPIO port expander
//! - [`time::Clock`] - Monotonic millisecond timestamps
//!
//! Blocking delays use [`embedded_hal::delay::DelayNs`] directly.
//!
//! [`embedded_hal::delay::DelayNs`]: https://docs.rs/embedded-hal/1.0/embedded_hal/delay/trait.DelayNs.html

#![no_std]
#![deny(unsafe_code)]

pub mod expander;
pub mod time;

// Re-export key traits at crate root for convenience
pub use expander::{Level, Port, PortExpander};
pub use time::Clock;

#[cfg(feature = "embassy")]
pub use time::EmbassyClock;
