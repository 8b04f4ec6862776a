//! Drag-to-dismiss decisions and progress.

use crate::config::ViewerConfig;
use booru_foundation::gesture_constants::{GEOMETRY_EPSILON, MIN_SCALE};

/// How far the unzoomed content has been dragged toward dismissal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissProgress {
    /// 0 = not dragged, 1 = at or past the drag threshold.
    pub dismiss_progress: f32,
    /// `1 - dismiss_progress`, consumed for fading and scaling the chrome.
    pub restored_fraction: f32,
}

impl DismissProgress {
    pub const RESTORED: DismissProgress = DismissProgress {
        dismiss_progress: 0.0,
        restored_fraction: 1.0,
    };
}

/// Thresholds derived from the config and the current viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissController {
    drag_threshold: f32,
    dismiss_distance: f32,
    velocity_threshold: f32,
}

impl DismissController {
    pub fn new(config: &ViewerConfig, viewport_height: f32) -> Self {
        let height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        Self {
            drag_threshold: (height * config.drag_threshold_fraction).max(GEOMETRY_EPSILON),
            dismiss_distance: height * config.dismiss_distance_fraction,
            velocity_threshold: config.dismiss_velocity_threshold,
        }
    }

    /// Distance over which dismiss progress runs from 0 to 1.
    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold
    }

    pub fn dismiss_distance(&self) -> f32 {
        self.dismiss_distance
    }

    /// Zoomed content reports no progress; it can't be dragged away.
    pub fn progress(&self, offset_y: f32, scale: f32) -> DismissProgress {
        if scale > MIN_SCALE || !offset_y.is_finite() {
            return DismissProgress::RESTORED;
        }
        let dismiss_progress = offset_y.clamp(0.0, self.drag_threshold) / self.drag_threshold;
        DismissProgress {
            dismiss_progress,
            restored_fraction: 1.0 - dismiss_progress,
        }
    }

    /// Whether releasing here dismisses the viewer: a fast downward flick or
    /// a drag past the dismiss distance. Never while pressed or zoomed.
    pub fn should_dismiss(
        &self,
        offset_y: f32,
        velocity_sample: f32,
        is_pressed: bool,
        scale: f32,
    ) -> bool {
        if is_pressed || scale > MIN_SCALE {
            return false;
        }
        velocity_sample > self.velocity_threshold || offset_y > self.dismiss_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DismissController {
        DismissController::new(&ViewerConfig::default(), 1000.0)
    }

    #[test]
    fn thresholds_follow_viewport_height() {
        let controller = controller();
        assert_eq!(controller.drag_threshold(), 250.0);
        assert!((controller.dismiss_distance() - 166.666_67).abs() < 1e-3);
    }

    #[test]
    fn progress_runs_over_drag_threshold() {
        let controller = controller();
        assert_eq!(controller.progress(0.0, 1.0), DismissProgress::RESTORED);
        assert_eq!(controller.progress(-40.0, 1.0).dismiss_progress, 0.0);
        let half = controller.progress(125.0, 1.0);
        assert_eq!(half.dismiss_progress, 0.5);
        assert_eq!(half.restored_fraction, 0.5);
        assert_eq!(controller.progress(900.0, 1.0).dismiss_progress, 1.0);
    }

    #[test]
    fn zoomed_content_has_no_progress() {
        assert_eq!(controller().progress(200.0, 2.0), DismissProgress::RESTORED);
    }

    #[test]
    fn far_slow_drag_dismisses() {
        assert!(controller().should_dismiss(260.0, 0.0, false, 1.0));
    }

    #[test]
    fn short_slow_drag_does_not_dismiss() {
        assert!(!controller().should_dismiss(100.0, 10.0, false, 1.0));
    }

    #[test]
    fn fast_flick_dismisses() {
        assert!(controller().should_dismiss(50.0, 65.0, false, 1.0));
    }

    #[test]
    fn never_dismisses_while_pressed_or_zoomed() {
        let controller = controller();
        assert!(!controller.should_dismiss(500.0, 100.0, true, 1.0));
        assert!(!controller.should_dismiss(500.0, 100.0, false, 1.5));
    }

    #[test]
    fn zero_height_viewport_does_not_divide_by_zero() {
        let controller = DismissController::new(&ViewerConfig::default(), 0.0);
        let progress = controller.progress(10.0, 1.0);
        assert_eq!(progress.dismiss_progress, 1.0);
    }
}
