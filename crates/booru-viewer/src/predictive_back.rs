//! Bridges the host's predictive-back gesture into the viewer.
//!
//! Back progress runs from 1 (viewer fully shown) down to 0 (fully
//! dismissed) as the user drags the system back gesture.

/// Progress at or below this counts as fully dismissed when detecting a
/// rebound. Host streams often bottom out just above 0.
pub const BACK_REBOUND_EPSILON: f32 = 1e-3;

/// Back gesture signal from the host's navigation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackEvent {
    Started,
    /// Current back progress; 1 = fully shown, 0 = fully dismissed.
    Progressed(f32),
    Cancelled,
    Committed,
}

/// Tracks back progress and reports when the transform must reset.
#[derive(Clone, Debug)]
pub struct PredictiveBackBridge {
    back_progress: f32,
    in_gesture: bool,
}

impl Default for PredictiveBackBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictiveBackBridge {
    pub fn new() -> Self {
        Self {
            back_progress: 1.0,
            in_gesture: false,
        }
    }

    pub fn back_progress(&self) -> f32 {
        self.back_progress
    }

    pub fn in_gesture(&self) -> bool {
        self.in_gesture
    }

    /// Applies a back event. Returns true when the transform must reset to
    /// scale 1 with no offset: a new back gesture starts, a cancelled one
    /// ends, or progress rebounds from 0.
    pub fn on_back_event(&mut self, event: BackEvent) -> bool {
        match event {
            BackEvent::Started => {
                self.in_gesture = true;
                self.back_progress = 1.0;
                log::debug!("predictive back started");
                true
            }
            BackEvent::Progressed(progress) => {
                let progress = if progress.is_finite() {
                    progress.clamp(0.0, 1.0)
                } else {
                    log::warn!("non-finite back progress, treating as fully shown");
                    1.0
                };
                let started = !self.in_gesture;
                let rebounded =
                    self.back_progress <= BACK_REBOUND_EPSILON && progress > BACK_REBOUND_EPSILON;
                self.in_gesture = true;
                self.back_progress = progress;
                if started || rebounded {
                    log::debug!("predictive back reset at progress {progress:.3}");
                }
                started || rebounded
            }
            BackEvent::Cancelled => {
                self.in_gesture = false;
                self.back_progress = 1.0;
                log::debug!("predictive back cancelled");
                true
            }
            BackEvent::Committed => {
                self.in_gesture = false;
                self.back_progress = 0.0;
                log::debug!("predictive back committed");
                false
            }
        }
    }

    /// Back progress scaled by how far the drag-to-dismiss has restored the
    /// content.
    pub fn combined_progress(&self, restored_fraction: f32) -> f32 {
        (self.back_progress * restored_fraction).clamp(0.0, 1.0)
    }
}
