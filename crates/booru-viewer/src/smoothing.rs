//! Presentation-side interpolation of the target transform.

use crate::transform_state::TransformState;
use booru_animation::{Animatable, AnimationType};
use booru_foundation::gesture_constants::MIN_SCALE;
use booru_ui_graphics::Point;

/// Eases the presented scale and offset toward the gesture loop's target.
///
/// Follows the finger exactly while pressed; after release it animates to
/// the (clamped) target with the configured animation.
#[derive(Debug, Clone)]
pub struct SmoothedTransform {
    scale: Animatable<f32>,
    offset: Animatable<Point>,
    is_pressed: bool,
}

impl Default for SmoothedTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SmoothedTransform {
    pub fn new() -> Self {
        Self {
            scale: Animatable::new(MIN_SCALE),
            offset: Animatable::new(Point::ZERO),
            is_pressed: false,
        }
    }

    pub fn update(&mut self, target: TransformState, animation: AnimationType) {
        self.is_pressed = target.is_pressed;
        if target.is_pressed {
            self.snap(target);
        } else {
            self.scale.animateTo(target.scale, animation);
            self.offset.animateTo(target.offset, animation);
        }
    }

    pub fn snap(&mut self, target: TransformState) {
        self.is_pressed = target.is_pressed;
        self.scale.snapTo(target.scale);
        self.offset.snapTo(target.offset);
    }

    /// Returns whether another frame is needed.
    pub fn advance(&mut self, frame_time_nanos: u64) -> bool {
        let scale_running = self.scale.advance(frame_time_nanos);
        let offset_running = self.offset.advance(frame_time_nanos);
        scale_running || offset_running
    }

    pub fn is_running(&self) -> bool {
        self.scale.is_running() || self.offset.is_running()
    }

    pub fn value(&self) -> TransformState {
        TransformState {
            scale: self.scale.value(),
            offset: self.offset.value(),
            is_pressed: self.is_pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booru_animation::{AnimationSpec, Easing};

    const FRAME: u64 = 16_000_000;

    fn target(scale: f32, offset: Point, is_pressed: bool) -> TransformState {
        TransformState {
            scale,
            offset,
            is_pressed,
        }
    }

    #[test]
    fn snaps_while_pressed() {
        let mut smoothed = SmoothedTransform::new();
        smoothed.update(
            target(2.0, Point::new(-30.0, 10.0), true),
            AnimationType::default(),
        );
        assert!(!smoothed.is_running());
        assert_eq!(smoothed.value(), target(2.0, Point::new(-30.0, 10.0), true));
    }

    #[test]
    fn animates_after_release() {
        let mut smoothed = SmoothedTransform::new();
        smoothed.update(target(1.0, Point::new(0.0, 100.0), true), AnimationType::default());
        let spec = AnimationType::Tween(AnimationSpec::tween(100, Easing::LinearEasing));
        smoothed.update(target(1.0, Point::ZERO, false), spec);
        assert!(smoothed.is_running());

        assert!(smoothed.advance(0));
        assert_eq!(smoothed.value().offset, Point::new(0.0, 100.0));
        assert!(smoothed.advance(50_000_000));
        assert!((smoothed.value().offset.y - 50.0).abs() < 1e-3);

        let mut time = 50_000_000;
        while smoothed.advance(time) {
            time += FRAME;
        }
        assert_eq!(smoothed.value(), target(1.0, Point::ZERO, false));
    }
}
