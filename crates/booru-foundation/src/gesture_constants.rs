//! Shared gesture constants for the full-screen image viewer.
//!
//! # DPI Considerations
//!
//! Distances are in logical pixels. Velocity thresholds that are expressed
//! "per event frame" depend on the platform's input sampling rate; the
//! defaults assume a typical 60-120 Hz touch stream.

/// Touch slop in logical pixels.
///
/// A single-pointer sequence that travels further than this from its press
/// position is a drag, and its release never counts as a tap. Matches
/// Android's ViewConfiguration.TOUCH_SLOP (~8dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Caps the release velocity reported with a dismiss so the host's exit
/// animation stays sane after a jittery final frame.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Default maximum interval between two taps of a double tap.
pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: u64 = 300;

/// Recommended bounds for a user-configured double-tap interval.
pub const RECOMMENDED_DOUBLE_TAP_TIMEOUT_MS: std::ops::RangeInclusive<u64> = 100..=500;

/// Smallest scale the viewer ever shows; content at this scale fits the viewport.
pub const MIN_SCALE: f32 = 1.0;

/// Default upper bound for pinch zoom.
pub const DEFAULT_MAX_SCALE: f32 = 4.0;

/// Default scale a double tap zooms to.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 2.0;

/// A release whose last vertical movement exceeded this many pixels per
/// event frame dismisses the viewer regardless of distance.
pub const DISMISS_VELOCITY_THRESHOLD: f32 = 60.0;

/// While the unzoomed content sits within this many pixels of its vertical
/// origin, a mostly-horizontal move is handed to the outer pager.
pub const SWIPE_VERTICAL_SLOP: f32 = 10.0;

/// Stand-in for zero-sized dimensions and scales in divisions.
pub const GEOMETRY_EPSILON: f32 = 1e-3;
