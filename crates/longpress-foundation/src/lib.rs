//! Pointer input and gesture arbitration for the long press control.
//!
//! The interesting part lives in [`nodes::input::gestures`]: a per-control
//! arbiter that turns a press lifecycle into exactly one [`Decision`].

pub mod gesture_constants;
pub mod nodes;

pub use nodes::input::gestures::{
    ArbiterPhase, Decision, DecisionSink, DistancePolicy, ExclusiveGestureArbiter, GestureConfig,
    GestureConfigError, LongPressArbiter, PressArbiter, PressInput, PressSession, PressStrategy,
};
pub use nodes::input::{PointerDispatcher, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::nodes::input::gestures::{
        Decision, DistancePolicy, GestureConfig, PressArbiter, PressInput, PressStrategy,
    };
    pub use crate::nodes::input::prelude::*;
}

#[cfg(test)]
mod tests;
