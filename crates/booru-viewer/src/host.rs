//! Callback seam toward the navigation layer and the outer pager.

use crate::gesture_loop::GestureEffect;

/// Receives the viewer's outward-facing side effects.
pub trait ViewerHost {
    /// The viewer was dismissed; `velocity` is the release speed in px/s
    /// along y, for continuing the exit animation.
    fn on_dismiss(&mut self, velocity: f32);

    /// The outer pager may (or may not) swipe between images.
    fn set_user_scroll_enabled(&mut self, enabled: bool);

    /// A single-pointer horizontal swipe was left to the pager.
    fn on_yielded_to_pager(&mut self) {}

    fn on_double_tap(&mut self, _zoomed_in: bool) {}
}

/// Forwards one effect to the host.
pub(crate) fn dispatch<H: ViewerHost + ?Sized>(host: &mut H, effect: GestureEffect) {
    match effect {
        GestureEffect::Dismiss { velocity } => host.on_dismiss(velocity),
        GestureEffect::SetUserScrollEnabled(enabled) => host.set_user_scroll_enabled(enabled),
        GestureEffect::YieldedToPager => host.on_yielded_to_pager(),
        GestureEffect::DoubleTap { zoomed_in, .. } => host.on_double_tap(zoomed_in),
    }
}

/// Host that ignores everything; handy when only the transform is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHost;

impl ViewerHost for NoopHost {
    fn on_dismiss(&mut self, _velocity: f32) {}

    fn set_user_scroll_enabled(&mut self, _enabled: bool) {}
}
