//! Single-pointer tap and double-tap recognition.

use crate::content_geometry::ContentGeometry;
use crate::input::PointerEvent;
use booru_ui_graphics::Point;

/// Result of offering a release to the [`TapClassifier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapOutcome {
    NoTap,
    FirstTapRegistered,
    /// Second tap within the window, with the release position.
    DoubleTapDetected(Point),
}

/// Pending-tap bookkeeping. `pending_tap_count == 1` implies
/// `first_tap_ms` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TapState {
    pub pending_tap_count: u8,
    pub first_tap_ms: Option<u64>,
}

/// Detects double taps from successive single-pointer releases.
#[derive(Clone, Debug)]
pub struct TapClassifier {
    threshold_ms: u64,
    state: TapState,
}

impl TapClassifier {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            threshold_ms,
            state: TapState::default(),
        }
    }

    pub fn threshold_ms(&self) -> u64 {
        self.threshold_ms
    }

    pub fn set_threshold_ms(&mut self, threshold_ms: u64) {
        self.threshold_ms = threshold_ms;
    }

    pub fn state(&self) -> TapState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = TapState::default();
    }

    /// Drops a pending first tap once the double-tap window has passed.
    pub fn expire(&mut self, now_ms: u64) {
        if let Some(first) = self.state.first_tap_ms {
            if now_ms.saturating_sub(first) >= self.threshold_ms {
                self.reset();
            }
        }
    }

    /// Classifies a release event.
    ///
    /// Only events with exactly one pointer, which just lifted, are taps.
    /// A second tap arriving after the window starts a new window instead
    /// of being dropped.
    pub fn on_release(&mut self, event: &PointerEvent) -> TapOutcome {
        let [change] = event.changes.as_slice() else {
            return TapOutcome::NoTap;
        };
        if !change.changed_to_up() {
            return TapOutcome::NoTap;
        }

        let now = event.uptime_ms;
        match self.state.first_tap_ms {
            Some(first)
                if self.state.pending_tap_count == 1
                    && now.saturating_sub(first) < self.threshold_ms =>
            {
                self.reset();
                TapOutcome::DoubleTapDetected(change.position)
            }
            _ => {
                self.state = TapState {
                    pending_tap_count: 1,
                    first_tap_ms: Some(now),
                };
                TapOutcome::FirstTapRegistered
            }
        }
    }
}

/// Target transform after a double tap at `tap`.
///
/// Zoomed content resets to scale 1. Otherwise the content zooms to
/// `double_tap_scale` with the tapped content point moved to the viewport
/// center.
pub fn double_tap_transform(
    scale: f32,
    tap: Point,
    geometry: &ContentGeometry,
    double_tap_scale: f32,
) -> (f32, Point) {
    if scale > 1.0 {
        return (1.0, Point::ZERO);
    }

    let new_scale = double_tap_scale;
    let origin = geometry.content_origin;
    let offset = (geometry.viewport_center() - origin) / new_scale - (tap - origin);
    (new_scale, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Contact, PointerTracker};
    use booru_ui_graphics::Size;

    fn release_at(time_ms: u64, position: Point) -> PointerEvent {
        let mut tracker = PointerTracker::new();
        tracker.process(time_ms, &[Contact::pressed(1, position)]);
        tracker
            .process(time_ms, &[Contact::released(1, position)])
            .expect("release event")
    }

    #[test]
    fn second_tap_inside_window_is_double_tap() {
        let mut classifier = TapClassifier::new(300);
        let point = Point::new(40.0, 60.0);
        assert_eq!(
            classifier.on_release(&release_at(1_000, point)),
            TapOutcome::FirstTapRegistered
        );
        assert_eq!(
            classifier.on_release(&release_at(1_299, point)),
            TapOutcome::DoubleTapDetected(point)
        );
        assert_eq!(classifier.state(), TapState::default());
    }

    #[test]
    fn late_second_tap_restarts_window() {
        let mut classifier = TapClassifier::new(300);
        let point = Point::new(40.0, 60.0);
        classifier.on_release(&release_at(1_000, point));
        assert_eq!(
            classifier.on_release(&release_at(1_301, point)),
            TapOutcome::FirstTapRegistered
        );
        assert_eq!(classifier.state().first_tap_ms, Some(1_301));
    }

    #[test]
    fn expire_clears_pending_tap() {
        let mut classifier = TapClassifier::new(300);
        classifier.on_release(&release_at(0, Point::ZERO));
        classifier.expire(299);
        assert_eq!(classifier.state().pending_tap_count, 1);
        classifier.expire(300);
        assert_eq!(classifier.state().pending_tap_count, 0);
    }

    #[test]
    fn multi_pointer_release_is_not_a_tap() {
        let mut tracker = PointerTracker::new();
        tracker.process(
            0,
            &[
                Contact::pressed(1, Point::ZERO),
                Contact::pressed(2, Point::new(50.0, 0.0)),
            ],
        );
        let release = tracker
            .process(
                10,
                &[
                    Contact::released(1, Point::ZERO),
                    Contact::released(2, Point::new(50.0, 0.0)),
                ],
            )
            .expect("release");
        let mut classifier = TapClassifier::new(300);
        assert_eq!(classifier.on_release(&release), TapOutcome::NoTap);
        assert_eq!(classifier.state().pending_tap_count, 0);
    }

    #[test]
    fn double_tap_centers_tapped_point() {
        let geometry = ContentGeometry::fill(Size::new(1000.0, 2000.0));
        let tap = Point::new(200.0, 300.0);
        let (scale, offset) = double_tap_transform(1.0, tap, &geometry, 2.0);
        assert_eq!(scale, 2.0);

        // The content point that was under the finger now sits at the center.
        let content_point = tap - geometry.content_origin;
        let on_screen = geometry.content_origin + (content_point + offset) * scale;
        assert_eq!(on_screen, geometry.viewport_center());
    }

    #[test]
    fn double_tap_when_zoomed_resets() {
        let geometry = ContentGeometry::fill(Size::new(1000.0, 2000.0));
        assert_eq!(
            double_tap_transform(2.5, Point::new(1.0, 1.0), &geometry, 2.0),
            (1.0, Point::ZERO)
        );
    }
}
