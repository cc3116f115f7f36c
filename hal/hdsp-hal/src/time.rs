//! Time abstractions
//!
//! The controller only needs a monotonic millisecond counter to rate-limit
//! scrolling. Blocking waits are a separate capability (`DelayNs`).

/// Monotonic millisecond clock
///
/// The counter is allowed to wrap; consumers compute elapsed time with
/// wrapping subtraction.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch (usually boot)
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        C::now_ms(self)
    }
}

/// Clock backed by the embassy time driver
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
