//! Assertion helpers for robot tests.

use booru_ui_graphics::{Point, Rect, Size};

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that content overflowing the viewport on an axis leaves no gap at
/// either viewport edge on that axis.
pub fn assert_covers_viewport(content: Rect, viewport: Size, tolerance: f32, msg: &str) {
    if content.width > viewport.width {
        assert!(
            content.x <= tolerance && content.x + content.width >= viewport.width - tolerance,
            "{}: content {:?} leaves a horizontal gap in {:?}",
            msg,
            content,
            viewport
        );
    }
    if content.height > viewport.height {
        assert!(
            content.y <= tolerance && content.y + content.height >= viewport.height - tolerance,
            "{}: content {:?} leaves a vertical gap in {:?}",
            msg,
            content,
            viewport
        );
    }
}
