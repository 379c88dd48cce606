//! Pure math/data for pointer geometry.
//!
//! Positions are logical pixels in the coordinate space of the host input
//! layer; nothing here knows about layout or rendering.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::Point;
}
