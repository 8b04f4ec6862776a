//! Single-pointer drag on unzoomed content.

use crate::gesture_constants::{GEOMETRY_EPSILON, MIN_SCALE};
use crate::input::PointerEvent;
use booru_ui_graphics::Point;

/// Applies a vertical drag delta with resistance above the starting position.
///
/// While the content sits above its origin (`offset_y < 0`), further upward
/// movement is scaled by `1 + clamp(offset_y, -max, 0) / max`, which falls to
/// zero as the drag approaches `max_drag_to_top`. Downward movement is never
/// damped.
pub fn elastic_drag_y(offset_y: f32, pan_y: f32, max_drag_to_top: f32) -> f32 {
    if offset_y < 0.0 && pan_y < 0.0 {
        let limit = max_drag_to_top.max(GEOMETRY_EPSILON);
        let coefficient = 1.0 + offset_y.clamp(-limit, 0.0) / limit;
        offset_y + pan_y * coefficient
    } else {
        offset_y + pan_y
    }
}

/// Drag-mode offset: horizontal movement passes through, vertical is elastic.
pub fn drag_offset(offset: Point, pan: Point, max_drag_to_top: f32) -> Point {
    Point::new(
        offset.x + pan.x,
        elastic_drag_y(offset.y, pan.y, max_drag_to_top),
    )
}

/// Whether this event is the start of a horizontal swipe that belongs to the
/// outer pager rather than the image.
///
/// Applies only to a single pointer on unzoomed content still within
/// `vertical_slop` of its vertical origin. `|dx| > |dy|` is the same test as
/// `|dx / dy| > 1` but stays defined when `dy == 0`.
pub fn is_horizontal_swipe(
    event: &PointerEvent,
    scale: f32,
    offset: Point,
    vertical_slop: f32,
) -> bool {
    if scale > MIN_SCALE || offset.y.abs() > vertical_slop || event.pressed_count() != 1 {
        return false;
    }

    event
        .changes
        .iter()
        .find(|change| change.is_tracked())
        .map(|change| {
            let delta = change.position_change();
            delta.x.abs() > delta.y.abs()
        })
        .unwrap_or(false)
}
