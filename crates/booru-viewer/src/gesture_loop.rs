//! The per-sequence gesture state machine.
//!
//! [`GestureLoop`] is a reducer: each pointer or back event updates the
//! target [`TransformState`] and returns the side effects the host must
//! act on. It never animates; presentation smoothing lives in
//! [`crate::smoothing`].

use crate::chrome::ChromeStyle;
use crate::config::ViewerConfig;
use crate::dismiss::{DismissController, DismissProgress};
use crate::predictive_back::{BackEvent, PredictiveBackBridge};
use crate::transform_state::{sanitize_scale, TransformState};
use booru_foundation::gesture_constants::{
    DEFAULT_DOUBLE_TAP_SCALE, DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_SCALE,
};
use booru_foundation::{
    calculate_centroid, clamp_offset, double_tap_transform, is_horizontal_swipe, resolve,
    ContentGeometry, PointerEvent, PointerEventKind, ResolveMode, ResolverInput, TapClassifier,
    TapOutcome, VelocityTracker1D,
};
use booru_ui_graphics::Point;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer down and the transform at rest.
    Idle,
    /// At least one pointer of the current sequence is down.
    Tracking,
    /// All pointers released; the presented transform is easing back to a
    /// clamped target.
    SpringBack,
    /// Drag-to-dismiss fired. Pointer input is ignored until [`GestureLoop::reset`].
    Dismissed,
}

/// Side effect produced by the gesture loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEffect {
    /// Close the viewer. `velocity` is the release speed along y in px/s.
    Dismiss { velocity: f32 },
    /// The outer pager may swipe only while the image is unzoomed.
    SetUserScrollEnabled(bool),
    /// The current sequence is a horizontal swipe left to the pager.
    YieldedToPager,
    DoubleTap { position: Point, zoomed_in: bool },
}

pub type GestureEffects = SmallVec<[GestureEffect; 2]>;

/// Bookkeeping for one down-to-release sequence.
#[derive(Clone, Copy, Debug, Default)]
struct Sequence {
    /// Two or more pointers were down at some point.
    multi_touch: bool,
    /// Summed movement of the tracked pointers.
    travel: f32,
    /// The viewer acted on motion, so the pager can no longer claim it.
    claimed: bool,
    /// The pager claimed the sequence.
    yielded: bool,
}

impl Sequence {
    fn is_tap(&self) -> bool {
        !self.multi_touch && !self.yielded && self.travel <= DRAG_THRESHOLD
    }
}

pub struct GestureLoop {
    config: ViewerConfig,
    geometry: ContentGeometry,
    dismiss: DismissController,
    transform: TransformState,
    phase: GesturePhase,
    taps: TapClassifier,
    back: PredictiveBackBridge,
    velocity: VelocityTracker1D,
    sequence: Sequence,
    /// Vertical movement of the last move frame, in px per frame.
    velocity_sample: f32,
    user_scroll_enabled: bool,
}

impl GestureLoop {
    /// Builds the loop. An invalid `config` is logged and corrected where it
    /// is used: scales fall back into `[MIN_SCALE, max_scale]`.
    pub fn new(config: ViewerConfig, geometry: ContentGeometry) -> Self {
        warn_if_invalid(&config);
        Self {
            dismiss: DismissController::new(&config, geometry.viewport_size.height),
            taps: TapClassifier::new(config.double_tap_threshold_ms),
            config,
            geometry,
            transform: TransformState::default(),
            phase: GesturePhase::Idle,
            back: PredictiveBackBridge::new(),
            velocity: VelocityTracker1D::new(),
            sequence: Sequence::default(),
            velocity_sample: 0.0,
            user_scroll_enabled: true,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn geometry(&self) -> &ContentGeometry {
        &self.geometry
    }

    pub fn transform(&self) -> TransformState {
        self.transform
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn tap_classifier(&self) -> &TapClassifier {
        &self.taps
    }

    pub fn back_progress(&self) -> f32 {
        self.back.back_progress()
    }

    /// Vertical movement of the most recent move frame.
    pub fn velocity_sample(&self) -> f32 {
        self.velocity_sample
    }

    pub fn user_scroll_enabled(&self) -> bool {
        self.user_scroll_enabled
    }

    pub fn dismiss_progress(&self) -> DismissProgress {
        self.dismiss
            .progress(self.transform.offset.y, self.transform.scale)
    }

    /// Chrome for the target transform.
    pub fn chrome(&self) -> ChromeStyle {
        self.chrome_at(self.transform.scale, self.transform.offset.y)
    }

    /// Chrome for an arbitrary (e.g. smoothed) transform.
    pub fn chrome_at(&self, scale: f32, offset_y: f32) -> ChromeStyle {
        let progress = self.dismiss.progress(offset_y, scale);
        let combined = self.back.combined_progress(progress.restored_fraction);
        ChromeStyle::from_progress(combined, progress.restored_fraction)
    }

    pub fn set_config(&mut self, config: ViewerConfig) {
        warn_if_invalid(&config);
        self.taps.set_threshold_ms(config.double_tap_threshold_ms);
        self.dismiss = DismissController::new(&config, self.geometry.viewport_size.height);
        self.config = config;
    }

    /// Updates the layout, e.g. after the image loads or the window resizes.
    /// A released transform is re-clamped against the new bounds.
    pub fn set_geometry(&mut self, geometry: ContentGeometry) {
        self.geometry = geometry;
        self.dismiss = DismissController::new(&self.config, geometry.viewport_size.height);
        if !self.transform.is_pressed && self.phase != GesturePhase::Dismissed {
            self.transform.offset =
                clamp_offset(self.transform.scale, self.transform.offset, &self.geometry);
        }
    }

    /// Called once the presented transform has settled on the target.
    pub fn finish_spring_back(&mut self) {
        if self.phase == GesturePhase::SpringBack {
            log::debug!("spring back finished");
            self.phase = GesturePhase::Idle;
        }
    }

    /// Returns to the initial state, e.g. when the viewer shows a new image.
    pub fn reset(&mut self) -> GestureEffects {
        self.transform = TransformState::default();
        self.phase = GesturePhase::Idle;
        self.taps.reset();
        self.back = PredictiveBackBridge::new();
        self.velocity.reset();
        self.sequence = Sequence::default();
        self.velocity_sample = 0.0;

        let mut effects = GestureEffects::new();
        self.sync_user_scroll(&mut effects);
        effects
    }

    pub fn on_back_event(&mut self, event: BackEvent) -> GestureEffects {
        let mut effects = GestureEffects::new();
        if self.back.on_back_event(event) {
            self.transform.reset();
            self.sync_user_scroll(&mut effects);
        }
        effects
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> GestureEffects {
        let mut effects = GestureEffects::new();
        if self.phase == GesturePhase::Dismissed {
            return effects;
        }
        self.taps.expire(event.uptime_ms);

        if self.phase != GesturePhase::Tracking {
            if !event.any_changed_to_down() {
                return effects;
            }
            self.begin_sequence(event);
        }

        self.transform.is_pressed = event.pressed_count() > 0;
        if event.pressed_count() >= 2 {
            self.sequence.multi_touch = true;
        }
        self.sequence.travel += event
            .changes
            .iter()
            .filter(|change| change.is_tracked())
            .map(|change| change.position_change().distance())
            .sum::<f32>();

        if self.sequence.yielded {
            if event.all_released() {
                self.end_yielded_sequence();
            }
            return effects;
        }

        if !self.sequence.claimed
            && event.has_tracked_motion()
            && is_horizontal_swipe(
                event,
                self.transform.scale,
                self.transform.offset,
                self.config.swipe_vertical_slop,
            )
        {
            log::debug!("horizontal swipe, yielding to pager");
            self.sequence.yielded = true;
            self.taps.reset();
            effects.push(GestureEffect::YieldedToPager);
            if event.all_released() {
                self.end_yielded_sequence();
            }
            return effects;
        }

        if event.tracked_count() > 0 {
            self.apply_motion(event);
            self.sync_user_scroll(&mut effects);
        }

        // The pager keeps the sequence until the viewer has acted on it.
        if self.sequence.claimed || self.sequence.multi_touch || event.all_released() {
            event.consume();
        }

        if event.all_released() {
            self.release(event, &mut effects);
        }
        effects
    }

    fn begin_sequence(&mut self, event: &PointerEvent) {
        log::debug!("gesture sequence started at {}ms", event.uptime_ms);
        self.phase = GesturePhase::Tracking;
        self.sequence = Sequence::default();
        self.velocity_sample = 0.0;
        self.velocity.reset();
        self.record_velocity(event);
    }

    fn end_yielded_sequence(&mut self) {
        log::debug!("yielded sequence ended");
        self.transform.is_pressed = false;
        self.phase = GesturePhase::Idle;
    }

    fn record_velocity(&mut self, event: &PointerEvent) {
        if let Some(centroid) = calculate_centroid(event, true) {
            self.velocity
                .add_data_point(event.uptime_ms as i64, centroid.y);
        }
    }

    fn apply_motion(&mut self, event: &PointerEvent) {
        if event.has_tracked_motion() {
            self.sequence.claimed = true;
        }

        let max_scale = self.max_scale();
        let scale = sanitize_scale(self.transform.scale, max_scale);
        let resolution = resolve(
            event,
            ResolverInput {
                scale,
                offset: self.transform.offset,
                max_scale,
                max_drag_to_top: self.geometry.viewport_size.height
                    * self.config.max_drag_to_top_fraction,
                content_origin: self.geometry.content_origin,
            },
        );

        self.transform.scale = resolution.scale;
        self.transform.offset = match resolution.mode {
            // Unclamped so the content can be dragged toward dismissal.
            ResolveMode::Drag => resolution.offset,
            ResolveMode::ZoomPan => {
                clamp_offset(resolution.scale, resolution.offset, &self.geometry)
            }
        };
        if !self.transform.offset.is_finite() {
            log::warn!("non-finite offset after resolve, re-clamping");
            self.transform.offset = clamp_offset(self.transform.scale, Point::ZERO, &self.geometry);
        }
        self.velocity_sample = resolution.vertical_velocity;
        self.record_velocity(event);
    }

    fn release(&mut self, event: &PointerEvent, effects: &mut GestureEffects) {
        self.transform.is_pressed = false;
        let cancelled = event.kind == PointerEventKind::Cancel;

        if !cancelled
            && self.dismiss.should_dismiss(
                self.transform.offset.y,
                self.velocity_sample,
                false,
                self.transform.scale,
            )
        {
            let velocity = self
                .velocity
                .calculate_velocity_with_max(MAX_FLING_VELOCITY);
            log::debug!(
                "dismissed at offset {:.1} (sample {:.1}, {velocity:.0}px/s)",
                self.transform.offset.y,
                self.velocity_sample
            );
            self.phase = GesturePhase::Dismissed;
            self.taps.reset();
            effects.push(GestureEffect::Dismiss { velocity });
            return;
        }

        if !cancelled && self.sequence.is_tap() {
            if let TapOutcome::DoubleTapDetected(position) = self.taps.on_release(event) {
                let (scale, offset) = double_tap_transform(
                    self.transform.scale,
                    position,
                    &self.geometry,
                    self.double_tap_scale(),
                );
                let zoomed_in = scale > MIN_SCALE;
                log::debug!("double tap at {position:?}, zoomed_in={zoomed_in}");
                self.transform.scale = scale;
                self.transform.offset = offset;
                effects.push(GestureEffect::DoubleTap {
                    position,
                    zoomed_in,
                });
                self.sync_user_scroll(effects);
            }
        } else {
            self.taps.reset();
        }

        self.transform.offset =
            clamp_offset(self.transform.scale, self.transform.offset, &self.geometry);
        log::debug!(
            "spring back to scale {:.3} offset {:?}",
            self.transform.scale,
            self.transform.offset
        );
        self.phase = GesturePhase::SpringBack;
    }

    fn max_scale(&self) -> f32 {
        let max_scale = self.config.max_scale;
        if max_scale.is_finite() {
            max_scale.max(MIN_SCALE)
        } else {
            MIN_SCALE
        }
    }

    fn double_tap_scale(&self) -> f32 {
        let max_scale = self.max_scale();
        if self.config.double_tap_scale.is_finite() {
            self.config.double_tap_scale.clamp(MIN_SCALE, max_scale)
        } else {
            DEFAULT_DOUBLE_TAP_SCALE.min(max_scale)
        }
    }

    fn sync_user_scroll(&mut self, effects: &mut GestureEffects) {
        let enabled = self.transform.scale <= MIN_SCALE;
        if enabled != self.user_scroll_enabled {
            self.user_scroll_enabled = enabled;
            effects.push(GestureEffect::SetUserScrollEnabled(enabled));
        }
    }
}

fn warn_if_invalid(config: &ViewerConfig) {
    if let Err(err) = config.validate() {
        log::warn!("invalid viewer config, correcting at use: {err}");
    }
}

#[cfg(test)]
#[path = "tests/gesture_loop_tests.rs"]
mod tests;
