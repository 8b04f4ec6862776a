//! A [`ViewerHost`] that records every callback for later assertions.

use booru_viewer::ViewerHost;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingHost {
    /// Release velocities of every dismissal, in call order.
    pub dismissals: Vec<f32>,
    /// Every `set_user_scroll_enabled` call, in order.
    pub scroll_enabled_calls: Vec<bool>,
    pub pager_yields: usize,
    /// `zoomed_in` of every double tap.
    pub double_taps: Vec<bool>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_dismissed(&self) -> bool {
        !self.dismissals.is_empty()
    }

    pub fn last_dismiss_velocity(&self) -> Option<f32> {
        self.dismissals.last().copied()
    }

    /// Pager scroll state as last told to the host; pager scrolling starts
    /// enabled.
    pub fn user_scroll_enabled(&self) -> bool {
        self.scroll_enabled_calls.last().copied().unwrap_or(true)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ViewerHost for RecordingHost {
    fn on_dismiss(&mut self, velocity: f32) {
        self.dismissals.push(velocity);
    }

    fn set_user_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled_calls.push(enabled);
    }

    fn on_yielded_to_pager(&mut self) {
        self.pager_yields += 1;
    }

    fn on_double_tap(&mut self, zoomed_in: bool) {
        self.double_taps.push(zoomed_in);
    }
}
