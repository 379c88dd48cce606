//! Default thresholds for the tap/long-press gesture.
//!
//! Distances are in logical pixels of the host input layer.

use std::time::Duration;

/// How long a press must be held before it counts as a long press.
pub const DEFAULT_MINIMUM_DURATION: Duration = Duration::from_millis(500);

/// How far the pointer may travel from the press origin while the
/// long press is still considered stationary.
pub const DEFAULT_MAXIMUM_DISTANCE: f32 = 10.0;
