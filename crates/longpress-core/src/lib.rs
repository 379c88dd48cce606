//! Core runtime for the long press control.
//!
//! Everything here runs on one logical UI thread. The runtime owns a clock and
//! a queue of scheduled timers; the host drives it by draining due timers once
//! per frame (or by advancing a manual clock in tests).

mod runtime;
mod timer_clock;

pub use runtime::{Runtime, RuntimeHandle, TimerId};
pub use timer_clock::{TimerClock, TimerRegistration};

/// Converts a duration to whole nanoseconds, saturating at `u64::MAX`.
pub fn duration_to_nanos(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

pub mod prelude {
    pub use crate::runtime::{Runtime, RuntimeHandle, TimerId};
    pub use crate::timer_clock::{TimerClock, TimerRegistration};
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
