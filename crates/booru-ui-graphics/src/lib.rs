//! Pure math/data for the booru image viewer
//!
//! This crate contains the geometry primitives shared by the gesture
//! engine, the animation layer and the viewer facade.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
