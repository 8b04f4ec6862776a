//! Keeps the transformed content within legal pan bounds.

use crate::content_geometry::ContentGeometry;
use crate::gesture_constants::GEOMETRY_EPSILON;
use booru_ui_graphics::Point;

/// Corrects `offset` so the content stays inside the viewport at `scale`.
///
/// Per axis, content that overflows the viewport is clamped so its edges
/// can't pull inside the viewport edges; content that fits is centered and
/// can't be panned on that axis. The X axis may clamp when the viewport is
/// portrait and Y when it is landscape, which lets the long device dimension
/// take overflow first.
///
/// The result is a fixed point: clamping it again returns it unchanged.
pub fn clamp_offset(scale: f32, offset: Point, geometry: &ContentGeometry) -> Point {
    let scale = if scale.is_finite() {
        scale.max(GEOMETRY_EPSILON)
    } else {
        1.0
    };
    let content = geometry.content_size;
    let origin = geometry.content_origin;
    let viewport = geometry.viewport_size;

    let x = clamp_axis(
        scale,
        offset.x,
        AxisGeometry {
            content: content.width,
            origin: origin.x,
            viewport: viewport.width,
            orientation_allows: viewport.is_portrait(),
        },
    );
    let y = clamp_axis(
        scale,
        offset.y,
        AxisGeometry {
            content: content.height,
            origin: origin.y,
            viewport: viewport.height,
            orientation_allows: viewport.is_landscape(),
        },
    );
    Point::new(x, y)
}

struct AxisGeometry {
    content: f32,
    origin: f32,
    viewport: f32,
    orientation_allows: bool,
}

fn clamp_axis(scale: f32, offset: f32, axis: AxisGeometry) -> f32 {
    let min = -(axis.content + (axis.origin - axis.viewport) / scale);
    let max = -(axis.origin / scale);
    let center = (axis.content / scale - axis.content) / 2.0;

    let overflows = axis.content * scale > axis.viewport;
    if (axis.orientation_allows || overflows) && max > min && offset.is_finite() {
        offset.clamp(min, max)
    } else {
        center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booru_ui_graphics::Size;

    fn portrait_fit() -> ContentGeometry {
        // 1000x500 image fitted into a 1000x2000 portrait viewport.
        ContentGeometry::new(
            Size::new(1000.0, 500.0),
            Point::new(0.0, 750.0),
            Size::new(1000.0, 2000.0),
        )
    }

    #[test]
    fn unzoomed_fitting_content_is_centered() {
        let geometry = portrait_fit();
        assert_eq!(
            clamp_offset(1.0, Point::new(120.0, -300.0), &geometry),
            Point::ZERO
        );
    }

    #[test]
    fn zoomed_content_clamps_to_edges() {
        let geometry = portrait_fit();
        // At 2x the image is 2000 wide: x may range over [-500, 0].
        let clamped = clamp_offset(2.0, Point::new(100.0, 0.0), &geometry);
        assert_eq!(clamped.x, 0.0);
        let clamped = clamp_offset(2.0, Point::new(-900.0, 0.0), &geometry);
        assert_eq!(clamped.x, -500.0);
        // 1000 tall at 2x still fits 2000: centered.
        assert_eq!(clamped.y, (500.0 / 2.0 - 500.0) / 2.0);
    }

    #[test]
    fn overflowing_axis_edges_touch_viewport() {
        let geometry = ContentGeometry::fill(Size::new(1000.0, 2000.0));
        let scale = 2.0;
        let clamped = clamp_offset(scale, Point::new(0.0, 10_000.0), &geometry);
        // Top edge of the content lands on the top of the viewport.
        let top = geometry.content_origin.y + clamped.y * scale;
        assert!(top.abs() < 1e-3);

        let clamped = clamp_offset(scale, Point::new(0.0, -10_000.0), &geometry);
        let bottom =
            geometry.content_origin.y + (geometry.content_size.height + clamped.y) * scale;
        assert!((bottom - geometry.viewport_size.height).abs() < 1e-3);
    }

    #[test]
    fn clamp_is_idempotent() {
        let geometries = [
            portrait_fit(),
            ContentGeometry::fit(Size::new(800.0, 3000.0), Size::new(1920.0, 1080.0)),
            ContentGeometry::fill(Size::new(1080.0, 1920.0)),
        ];
        for geometry in &geometries {
            for scale in [1.0, 1.3, 2.0, 3.7, 4.0] {
                for offset in [
                    Point::ZERO,
                    Point::new(-5000.0, 5000.0),
                    Point::new(321.0, -77.0),
                    Point::new(-12.5, -900.0),
                ] {
                    let once = clamp_offset(scale, offset, geometry);
                    let twice = clamp_offset(scale, once, geometry);
                    assert_eq!(once, twice, "scale {scale} offset {offset:?}");
                }
            }
        }
    }

    #[test]
    fn centered_whenever_content_fits() {
        let geometry = ContentGeometry::fit(Size::new(400.0, 300.0), Size::new(1000.0, 1000.0));
        for scale in [1.0, 1.5, 2.0, 3.0] {
            let fits_x = geometry.content_size.width * scale <= geometry.viewport_size.width;
            let fits_y = geometry.content_size.height * scale <= geometry.viewport_size.height;
            let clamped = clamp_offset(scale, Point::new(999.0, -999.0), &geometry);
            if fits_x {
                let center = (geometry.content_size.width / scale - geometry.content_size.width) / 2.0;
                assert_eq!(clamped.x, center);
            }
            if fits_y {
                let center =
                    (geometry.content_size.height / scale - geometry.content_size.height) / 2.0;
                assert_eq!(clamped.y, center);
            }
        }
    }

    #[test]
    fn degenerate_inputs_stay_finite() {
        let geometry = ContentGeometry::new(Size::ZERO, Point::ZERO, Size::ZERO);
        let clamped = clamp_offset(0.0, Point::new(f32::NAN, 3.0), &geometry);
        assert!(clamped.is_finite());
        let clamped = clamp_offset(f32::INFINITY, Point::new(1.0, 1.0), &portrait_fit());
        assert!(clamped.is_finite());
    }
}
