//! Pinch-zoom and pan resolution.
//!
//! The helpers mirror Jetpack Compose's `calculateZoom`/`calculatePan`/
//! `calculateCentroid`: only pointers pressed in both the previous and the
//! current frame contribute, so a finger landing or lifting never registers
//! as a jump.

use super::drag::drag_offset;
use crate::gesture_constants::MIN_SCALE;
use crate::input::PointerEvent;
use booru_ui_graphics::Point;

/// Centroid of the tracked pointers, at their current or previous positions.
pub fn calculate_centroid(event: &PointerEvent, use_current: bool) -> Option<Point> {
    let mut sum = Point::ZERO;
    let mut count = 0usize;
    for change in event.changes.iter().filter(|change| change.is_tracked()) {
        sum += if use_current {
            change.position
        } else {
            change.previous_position
        };
        count += 1;
    }
    (count > 0).then(|| sum / count as f32)
}

/// Average distance of the tracked pointers from their centroid.
pub fn calculate_centroid_size(event: &PointerEvent, use_current: bool) -> f32 {
    let Some(centroid) = calculate_centroid(event, use_current) else {
        return 0.0;
    };

    let mut distance = 0.0f32;
    let mut count = 0usize;
    for change in event.changes.iter().filter(|change| change.is_tracked()) {
        let position = if use_current {
            change.position
        } else {
            change.previous_position
        };
        distance += position.distance_to(centroid);
        count += 1;
    }
    distance / count as f32
}

/// Frame-to-frame zoom factor; 1.0 unless two or more pointers moved apart
/// or together.
pub fn calculate_zoom(event: &PointerEvent) -> f32 {
    let current = calculate_centroid_size(event, true);
    let previous = calculate_centroid_size(event, false);
    if current == 0.0 || previous == 0.0 {
        1.0
    } else {
        current / previous
    }
}

/// Frame-to-frame centroid translation.
pub fn calculate_pan(event: &PointerEvent) -> Point {
    match (
        calculate_centroid(event, true),
        calculate_centroid(event, false),
    ) {
        (Some(current), Some(previous)) => current - previous,
        _ => Point::ZERO,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveMode {
    /// Two or more tracked pointers, or already zoomed: pinch and pan.
    ZoomPan,
    /// Single pointer on unzoomed content: drag, possibly toward dismissal.
    Drag,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolverInput {
    pub scale: f32,
    pub offset: Point,
    pub max_scale: f32,
    pub max_drag_to_top: f32,
    pub content_origin: Point,
}

/// Candidate transform for one pointer event, before boundary clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub scale: f32,
    pub offset: Point,
    /// Vertical movement this frame in drag mode; 0 in zoom/pan mode.
    pub vertical_velocity: f32,
    pub mode: ResolveMode,
    /// Raw centroid translation this frame.
    pub pan: Point,
}

/// Interprets one pointer event as a zoom/pan or drag update.
pub fn resolve(event: &PointerEvent, input: ResolverInput) -> Resolution {
    let pan = calculate_pan(event);
    // A pointer that just landed or lifted has no motion yet, so it does
    // not turn a drag into a pinch.
    let zooming = input.scale > MIN_SCALE || event.tracked_count() >= 2;
    let max_scale = if input.max_scale.is_finite() {
        input.max_scale.max(MIN_SCALE)
    } else {
        MIN_SCALE
    };

    if !zooming {
        return Resolution {
            scale: input.scale,
            offset: drag_offset(input.offset, pan, input.max_drag_to_top),
            vertical_velocity: pan.y,
            mode: ResolveMode::Drag,
            pan,
        };
    }

    let scale = input.scale;
    let new_scale = (scale * calculate_zoom(event)).clamp(MIN_SCALE, max_scale);

    let offset = if new_scale > MIN_SCALE {
        let mut offset = input.offset + pan / new_scale;
        // Keep the pinch centroid over the same content point. Skipped at the
        // ceiling so the correction doesn't fight the clamp.
        if new_scale < max_scale {
            if let Some(centroid) = calculate_centroid(event, true) {
                let origin = input.content_origin;
                offset -= (centroid / scale - centroid / new_scale)
                    - (origin / scale - origin / new_scale);
            }
        }
        offset
    } else {
        Point::ZERO
    };

    log::trace!(
        "zoom/pan: scale {scale:.3} -> {new_scale:.3}, offset {:?} -> {offset:?}",
        input.offset
    );

    Resolution {
        scale: new_scale,
        offset,
        vertical_velocity: 0.0,
        mode: ResolveMode::ZoomPan,
        pan,
    }
}
