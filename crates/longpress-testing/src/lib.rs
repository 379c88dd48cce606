//! Testing utilities and harness for the long press control

pub mod robot;
pub mod robot_assertions;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}

#[cfg(test)]
#[path = "tests/long_press_button_tests.rs"]
mod tests;
