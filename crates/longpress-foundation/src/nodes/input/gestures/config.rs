use std::fmt;
use std::time::Duration;

use crate::gesture_constants::{DEFAULT_MAXIMUM_DISTANCE, DEFAULT_MINIMUM_DURATION};

/// What happens when the pointer strays beyond `maximum_distance`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistancePolicy {
    /// Record the overshoot on the session; the decision is unaffected.
    #[default]
    Track,
    /// Disarm the long press. Releasing afterwards still taps.
    FailLongPress,
    /// Abandon the press. Neither callback fires for it.
    CancelPress,
}

/// Immutable per-control gesture thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    minimum_duration: Duration,
    maximum_distance: f32,
    distance_policy: DistancePolicy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureConfigError {
    InvalidMinimumDuration { seconds: f64 },
    InvalidMaximumDistance { distance: f32 },
}

impl fmt::Display for GestureConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureConfigError::InvalidMinimumDuration { seconds } => {
                write!(f, "minimum duration must be finite and >= 0, got {seconds}s")
            }
            GestureConfigError::InvalidMaximumDistance { distance } => {
                write!(f, "maximum distance must be finite and >= 0, got {distance}")
            }
        }
    }
}

impl std::error::Error for GestureConfigError {}

impl GestureConfig {
    /// Builds a config from a duration in seconds and a distance in logical pixels.
    ///
    /// Negative, NaN and infinite values are rejected rather than clamped.
    pub fn new(minimum_duration: f64, maximum_distance: f32) -> Result<Self, GestureConfigError> {
        if !minimum_duration.is_finite() || minimum_duration < 0.0 {
            return Err(GestureConfigError::InvalidMinimumDuration {
                seconds: minimum_duration,
            });
        }
        let duration = Duration::try_from_secs_f64(minimum_duration).map_err(|_| {
            GestureConfigError::InvalidMinimumDuration {
                seconds: minimum_duration,
            }
        })?;
        Self::from_duration(duration, maximum_distance)
    }

    pub fn from_duration(
        minimum_duration: Duration,
        maximum_distance: f32,
    ) -> Result<Self, GestureConfigError> {
        if !maximum_distance.is_finite() || maximum_distance < 0.0 {
            return Err(GestureConfigError::InvalidMaximumDistance {
                distance: maximum_distance,
            });
        }
        Ok(Self {
            minimum_duration,
            maximum_distance,
            distance_policy: DistancePolicy::default(),
        })
    }

    pub fn with_distance_policy(mut self, policy: DistancePolicy) -> Self {
        self.distance_policy = policy;
        self
    }

    pub fn minimum_duration(&self) -> Duration {
        self.minimum_duration
    }

    pub fn maximum_distance(&self) -> f32 {
        self.maximum_distance
    }

    pub fn distance_policy(&self) -> DistancePolicy {
        self.distance_policy
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            minimum_duration: DEFAULT_MINIMUM_DURATION,
            maximum_distance: DEFAULT_MAXIMUM_DISTANCE,
            distance_policy: DistancePolicy::default(),
        }
    }
}
