//! UI surface for the long press control.

mod error;
mod label;
mod semantics;
mod widgets;

pub use error::LongPressButtonError;
pub use label::ButtonLabel;
pub use semantics::{
    SemanticsConfiguration, DEFAULT_ACTION_NAME, DEFAULT_LONG_PRESS_ACTION_LABEL,
};
pub use widgets::{LongPressButton, LongPressButtonBuilder};

pub use longpress_foundation::{
    ArbiterPhase, Decision, DistancePolicy, GestureConfig, GestureConfigError, PointerEvent,
    PressStrategy,
};

pub mod prelude {
    pub use crate::error::LongPressButtonError;
    pub use crate::label::ButtonLabel;
    pub use crate::widgets::{LongPressButton, LongPressButtonBuilder};
    pub use longpress_foundation::prelude::*;
}

#[cfg(test)]
#[path = "tests/long_press_button_tests.rs"]
mod tests;
