//! Pointer input model and gesture math for the full-screen image viewer.
//!
//! Everything here is a pure function of its inputs or a small value-type
//! state machine. The `booru-viewer` crate composes these pieces into the
//! gesture loop.

pub mod clock;
pub mod content_geometry;
pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use clock::UptimeClock;
pub use content_geometry::ContentGeometry;
pub use gestures::*;
pub use input::*;
pub use velocity_tracker::VelocityTracker1D;

pub use booru_ui_graphics::{Point, Size};

pub mod prelude {
    pub use crate::content_geometry::ContentGeometry;
    pub use crate::gestures::{TapClassifier, TapOutcome};
    pub use crate::input::prelude::*;
    pub use crate::input::PointerTracker;
    pub use booru_ui_graphics::{Point, Size};
}

#[cfg(test)]
#[path = "tests/pinch_sequence_tests.rs"]
mod pinch_sequence_tests;
