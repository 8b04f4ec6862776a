//! The image viewer facade hosts embed.

use crate::chrome::ChromeStyle;
use crate::config::ViewerConfig;
use crate::gesture_loop::{GestureEffects, GestureLoop, GesturePhase};
use crate::host::{dispatch, ViewerHost};
use crate::predictive_back::BackEvent;
use crate::smoothing::SmoothedTransform;
use crate::transform_state::TransformState;
use booru_foundation::{ContentGeometry, PointerEvent};

/// Full-screen image viewer: gesture loop, presentation smoothing and the
/// host callbacks wired together.
///
/// The host feeds pointer and back events as they arrive and calls
/// [`ImageViewer::on_frame`] once per rendered frame, then draws the
/// content with [`ImageViewer::presented_transform`] and the surrounding
/// chrome with [`ImageViewer::chrome`].
pub struct ImageViewer<H: ViewerHost> {
    gestures: GestureLoop,
    smoothed: SmoothedTransform,
    host: H,
}

impl<H: ViewerHost> ImageViewer<H> {
    pub fn new(config: ViewerConfig, geometry: ContentGeometry, host: H) -> Self {
        Self {
            gestures: GestureLoop::new(config, geometry),
            smoothed: SmoothedTransform::new(),
            host,
        }
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> GestureEffects {
        let effects = self.gestures.on_pointer_event(event);
        self.smoothed
            .update(self.gestures.transform(), self.gestures.config().smoothing);
        self.dispatch(&effects);
        effects
    }

    /// A back-driven reset is presented immediately rather than animated.
    pub fn on_back_event(&mut self, event: BackEvent) -> GestureEffects {
        let before = self.gestures.transform();
        let effects = self.gestures.on_back_event(event);
        let after = self.gestures.transform();
        if after != before {
            self.smoothed.snap(after);
        }
        self.dispatch(&effects);
        effects
    }

    /// Advances presentation smoothing. Returns whether another frame is
    /// needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let running = self.smoothed.advance(frame_time_nanos);
        if !running {
            self.gestures.finish_spring_back();
        }
        running
    }

    pub fn set_geometry(&mut self, geometry: ContentGeometry) {
        self.gestures.set_geometry(geometry);
        self.smoothed
            .update(self.gestures.transform(), self.gestures.config().smoothing);
    }

    pub fn set_config(&mut self, config: ViewerConfig) {
        self.gestures.set_config(config);
    }

    /// Back to the initial state, presented immediately.
    pub fn reset(&mut self) -> GestureEffects {
        let effects = self.gestures.reset();
        self.smoothed.snap(self.gestures.transform());
        self.dispatch(&effects);
        effects
    }

    /// Transform to draw this frame.
    pub fn presented_transform(&self) -> TransformState {
        self.smoothed.value()
    }

    /// Transform the presentation is heading to.
    pub fn target_transform(&self) -> TransformState {
        self.gestures.transform()
    }

    pub fn chrome(&self) -> ChromeStyle {
        let presented = self.smoothed.value();
        self.gestures.chrome_at(presented.scale, presented.offset.y)
    }

    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    pub fn gesture_loop(&self) -> &GestureLoop {
        &self.gestures
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn dispatch(&mut self, effects: &GestureEffects) {
        for effect in effects {
            dispatch(&mut self.host, *effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NoopHost;
    use booru_foundation::{Contact, PointerTracker};
    use booru_ui_graphics::{Point, Size};

    #[test]
    fn spring_back_finishes_when_smoothing_settles() {
        let mut viewer = ImageViewer::new(
            ViewerConfig::default(),
            ContentGeometry::fill(Size::new(500.0, 1000.0)),
            NoopHost,
        );
        let mut tracker = PointerTracker::new();
        let start = Point::new(250.0, 500.0);
        let moved = Point::new(250.0, 560.0);
        let end = Point::new(250.0, 580.0);
        for (time, contact) in [
            (0, Contact::pressed(1, start)),
            (16, Contact::pressed(1, moved)),
            (32, Contact::pressed(1, end)),
            (48, Contact::released(1, end)),
        ] {
            if let Some(event) = tracker.process(time, &[contact]) {
                viewer.on_pointer_event(&event);
            }
        }

        assert_eq!(viewer.phase(), GesturePhase::SpringBack);
        assert_eq!(viewer.presented_transform().offset.y, 80.0);
        assert_eq!(viewer.target_transform().offset, Point::ZERO);

        let mut frame = 0u64;
        while viewer.on_frame(frame) {
            frame += 16_000_000;
        }
        assert_eq!(viewer.phase(), GesturePhase::Idle);
        assert_eq!(viewer.presented_transform().offset, Point::ZERO);
    }
}
