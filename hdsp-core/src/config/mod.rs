//! Configuration types
//!
//! Board-level settings handed to the controller at construction. Nothing
//! here is persisted; every restart begins from these values.

pub mod types;

pub use types::*;
