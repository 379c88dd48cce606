//! Tap versus long-press arbitration.
//!
//! A control owns one [`PressArbiter`]. The host feeds it [`PressInput`]s and
//! the arbiter reports at most one [`Decision`] per press lifecycle through its
//! [`DecisionSink`]. Two strategies exist:
//!
//! - [`LongPressArbiter`] works from raw press events (or `is_pressing` edges)
//!   and runs its own cancellable timer. This is the portable default.
//! - [`ExclusiveGestureArbiter`] trusts host-provided recognizers and only
//!   enforces "first success wins" for each lifecycle.

mod arbiter;
mod config;
mod decision;
mod exclusive;
mod long_press;
mod session;
mod strategy;

pub use arbiter::{ArbiterPhase, PressArbiter, PressInput};
pub use config::{DistancePolicy, GestureConfig, GestureConfigError};
pub use decision::{Decision, DecisionSink};
pub use exclusive::ExclusiveGestureArbiter;
pub use long_press::LongPressArbiter;
pub use session::PressSession;
pub use strategy::PressStrategy;
