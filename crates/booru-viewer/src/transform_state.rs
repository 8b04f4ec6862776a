//! The image's current pan/zoom target.

use booru_foundation::gesture_constants::MIN_SCALE;
use booru_ui_graphics::Point;

/// Target transform for the image content.
///
/// Written only by the gesture loop. `offset` is in content units and is
/// applied before scaling: a content point `p` is drawn at
/// `content_origin + (p + offset) * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub offset: Point,
    pub is_pressed: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            offset: Point::ZERO,
            is_pressed: false,
        }
    }
}

impl TransformState {
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Back to scale 1 with no offset. Pressed state is left alone since a
    /// pointer may still be down.
    pub fn reset(&mut self) {
        self.scale = MIN_SCALE;
        self.offset = Point::ZERO;
    }
}

/// Re-clamps a scale carried over from a previous frame.
///
/// Accumulated floating error can push a stored scale slightly outside
/// `[1, max_scale]`; a non-finite scale falls back to 1.
pub fn sanitize_scale(scale: f32, max_scale: f32) -> f32 {
    let max_scale = if max_scale.is_finite() {
        max_scale.max(MIN_SCALE)
    } else {
        MIN_SCALE
    };
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, max_scale)
    } else {
        log::warn!("non-finite scale {scale}, resetting to {MIN_SCALE}");
        MIN_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_pressed_flag() {
        let mut state = TransformState {
            scale: 3.0,
            offset: Point::new(-20.0, 40.0),
            is_pressed: true,
        };
        assert!(state.is_zoomed());
        state.reset();
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.offset, Point::ZERO);
        assert!(state.is_pressed);
    }

    #[test]
    fn sanitize_scale_clamps_drift() {
        assert_eq!(sanitize_scale(0.9999, 4.0), 1.0);
        assert_eq!(sanitize_scale(4.0001, 4.0), 4.0);
        assert_eq!(sanitize_scale(2.5, 4.0), 2.5);
        assert_eq!(sanitize_scale(f32::NAN, 4.0), 1.0);
        assert_eq!(sanitize_scale(f32::INFINITY, 4.0), 1.0);
    }
}
