//! Animation utilities for the booru image viewer.
//!
//! Animations here are driven explicitly by the host's frame clock: callers
//! feed frame timestamps into [`Animatable::advance`] and read back the
//! interpolated value.

mod animation;

pub use animation::*;
