//! Robot-style scripting of gesture sequences against an [`ImageViewer`].
//!
//! The robot owns the viewer, a [`PointerTracker`] and a virtual clock. Each
//! pointer action advances the clock by one frame interval, sends the full
//! set of active contacts through the tracker and feeds the resulting event
//! to the viewer, the way a platform input loop would.
//!
//! # Example
//!
//! ```
//! use booru_testing::ViewerRobot;
//! use booru_ui_graphics::Size;
//!
//! let mut robot = ViewerRobot::new(Size::new(500.0, 1000.0));
//! robot.press(250.0, 100.0);
//! robot.move_by(0.0, 300.0);
//! robot.release();
//! assert!(robot.host().was_dismissed());
//! ```

use crate::host::RecordingHost;
use booru_foundation::{Contact, ContentGeometry, PointerId, PointerTracker};
use booru_ui_graphics::{Point, Rect, Size};
use booru_viewer::{
    BackEvent, ChromeStyle, GestureEffects, GesturePhase, ImageViewer, TransformState,
    ViewerConfig,
};

/// Pointer id used by the single-finger helpers.
pub const PRIMARY_POINTER: PointerId = 1;
/// Second finger for pinches.
pub const SECONDARY_POINTER: PointerId = 2;

/// Default interval between scripted frames.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Frames [`ViewerRobot::wait_for_idle`] pumps before giving up.
const MAX_IDLE_FRAMES: usize = 1_000;

pub struct ViewerRobot {
    viewer: ImageViewer<RecordingHost>,
    tracker: PointerTracker,
    contacts: Vec<Contact>,
    now_ms: u64,
    frame_interval_ms: u64,
    last_effects: GestureEffects,
    last_consumed: bool,
}

impl ViewerRobot {
    /// Viewer whose content exactly fills a viewport of `viewport` size.
    pub fn new(viewport: Size) -> Self {
        Self::with_config(ViewerConfig::default(), ContentGeometry::fill(viewport))
    }

    pub fn with_config(config: ViewerConfig, geometry: ContentGeometry) -> Self {
        Self {
            viewer: ImageViewer::new(config, geometry, RecordingHost::new()),
            tracker: PointerTracker::new(),
            contacts: Vec::new(),
            // Non-zero so the first tap never lines up with a default timestamp.
            now_ms: 1_000,
            frame_interval_ms: FRAME_INTERVAL_MS,
            last_effects: GestureEffects::new(),
            last_consumed: false,
        }
    }

    pub fn set_frame_interval_ms(&mut self, interval_ms: u64) {
        self.frame_interval_ms = interval_ms;
    }

    pub fn viewer(&self) -> &ImageViewer<RecordingHost> {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ImageViewer<RecordingHost> {
        &mut self.viewer
    }

    pub fn host(&self) -> &RecordingHost {
        self.viewer.host()
    }

    /// Target transform.
    pub fn transform(&self) -> TransformState {
        self.viewer.target_transform()
    }

    pub fn presented(&self) -> TransformState {
        self.viewer.presented_transform()
    }

    pub fn chrome(&self) -> ChromeStyle {
        self.viewer.chrome()
    }

    pub fn phase(&self) -> GesturePhase {
        self.viewer.phase()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Effects of the most recent pointer or back event.
    pub fn last_effects(&self) -> &GestureEffects {
        &self.last_effects
    }

    /// Whether the viewer consumed the most recent pointer event.
    pub fn last_event_consumed(&self) -> bool {
        self.last_consumed
    }

    /// Screen rectangle of the target transform's content.
    pub fn content_rect(&self) -> Rect {
        let geometry = self.viewer.gesture_loop().geometry();
        let transform = self.transform();
        Rect::from_origin_size(
            geometry.content_origin + transform.offset * transform.scale,
            geometry.content_size * transform.scale,
        )
    }

    /// Advances the clock without delivering input.
    pub fn advance_time(&mut self, millis: u64) {
        self.now_ms += millis;
    }

    pub fn pointer_down(&mut self, id: PointerId, position: Point) -> GestureEffects {
        self.contacts.retain(|contact| contact.id != id);
        self.contacts.push(Contact::pressed(id, position));
        self.send_frame()
    }

    pub fn pointer_move(&mut self, id: PointerId, position: Point) -> GestureEffects {
        self.set_position(id, position);
        self.send_frame()
    }

    pub fn pointer_up(&mut self, id: PointerId) -> GestureEffects {
        if let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) {
            contact.released = true;
        }
        let effects = self.send_frame();
        self.contacts.retain(|contact| contact.id != id);
        effects
    }

    /// Drops a pointer without a release, as an OS-level cancellation of a
    /// single contact would.
    pub fn pointer_vanish(&mut self, id: PointerId) -> GestureEffects {
        self.contacts.retain(|contact| contact.id != id);
        self.send_frame()
    }

    /// Cancels every active pointer.
    pub fn cancel(&mut self) -> GestureEffects {
        self.now_ms += self.frame_interval_ms;
        self.contacts.clear();
        match self.tracker.cancel_all(self.now_ms) {
            Some(event) => {
                self.last_effects = self.viewer.on_pointer_event(&event);
                self.last_consumed = event.is_consumed();
            }
            None => self.last_effects = GestureEffects::new(),
        }
        self.last_effects.clone()
    }

    /// Redelivers the active contacts unchanged: a move frame with no motion.
    pub fn hold(&mut self) -> GestureEffects {
        self.send_frame()
    }

    pub fn press(&mut self, x: f32, y: f32) -> GestureEffects {
        self.pointer_down(PRIMARY_POINTER, Point::new(x, y))
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> GestureEffects {
        self.pointer_move(PRIMARY_POINTER, Point::new(x, y))
    }

    /// Moves the primary pointer relative to where it is.
    pub fn move_by(&mut self, dx: f32, dy: f32) -> GestureEffects {
        let current = self
            .contacts
            .iter()
            .find(|contact| contact.id == PRIMARY_POINTER)
            .map(|contact| contact.position)
            .unwrap_or(Point::ZERO);
        self.pointer_move(PRIMARY_POINTER, current + Point::new(dx, dy))
    }

    pub fn release(&mut self) -> GestureEffects {
        self.pointer_up(PRIMARY_POINTER)
    }

    pub fn tap(&mut self, x: f32, y: f32) -> GestureEffects {
        self.press(x, y);
        self.release()
    }

    /// Two taps whose releases are `interval_ms` apart.
    pub fn double_tap(&mut self, x: f32, y: f32, interval_ms: u64) -> GestureEffects {
        self.tap(x, y);
        // The second release lands two frames after the first: down, then up.
        let frames = 2 * self.frame_interval_ms;
        self.advance_time(interval_ms.saturating_sub(frames));
        self.tap(x, y)
    }

    /// Press, move in `steps` equal increments, release.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) -> GestureEffects {
        self.pointer_down(PRIMARY_POINTER, from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.pointer_move(PRIMARY_POINTER, from + (to - from) * t);
        }
        self.release()
    }

    /// Two-finger horizontal pinch around `center`, from `from_span` to
    /// `to_span` apart, released at the end.
    pub fn pinch(&mut self, center: Point, from_span: f32, to_span: f32, steps: u32) {
        let half = |span: f32| Point::new(span / 2.0, 0.0);
        self.pointer_down(PRIMARY_POINTER, center - half(from_span));
        self.pointer_down(SECONDARY_POINTER, center + half(from_span));

        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            let span = from_span + (to_span - from_span) * t;
            self.set_position(PRIMARY_POINTER, center - half(span));
            self.set_position(SECONDARY_POINTER, center + half(span));
            self.send_frame();
        }

        self.pointer_up(SECONDARY_POINTER);
        self.pointer_up(PRIMARY_POINTER);
    }

    pub fn back(&mut self, event: BackEvent) -> GestureEffects {
        self.last_effects = self.viewer.on_back_event(event);
        self.last_effects.clone()
    }

    /// Pumps frames until presentation smoothing settles.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..MAX_IDLE_FRAMES {
            self.now_ms += self.frame_interval_ms;
            if !self.viewer.on_frame(self.now_ms * 1_000_000) {
                break;
            }
        }
    }

    fn set_position(&mut self, id: PointerId, position: Point) {
        if let Some(contact) = self.contacts.iter_mut().find(|contact| contact.id == id) {
            contact.position = position;
        }
    }

    fn send_frame(&mut self) -> GestureEffects {
        self.now_ms += self.frame_interval_ms;
        match self.tracker.process(self.now_ms, &self.contacts) {
            Some(event) => {
                self.last_effects = self.viewer.on_pointer_event(&event);
                self.last_consumed = event.is_consumed();
            }
            None => {
                self.last_effects = GestureEffects::new();
                self.last_consumed = false;
            }
        }
        self.last_effects.clone()
    }
}
