//! Where the pannable content sits inside the viewport.

use crate::gesture_constants::GEOMETRY_EPSILON;
use booru_ui_graphics::{Point, Size};

/// Layout of the image content, supplied by the presentation layer each frame.
///
/// Coordinates follow one convention throughout the gesture engine: a content
/// point `p` (relative to the content's top-left at scale 1) lands on screen at
/// `content_origin + (p + offset) * scale`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ContentGeometry {
    /// Natural size of the content at scale 1.
    pub content_size: Size,
    /// Top-left of the content in viewport coordinates.
    pub content_origin: Point,
    pub viewport_size: Size,
}

impl ContentGeometry {
    pub fn new(content_size: Size, content_origin: Point, viewport_size: Size) -> Self {
        Self {
            content_size,
            content_origin,
            viewport_size,
        }
    }

    /// Content that exactly fills the viewport.
    pub fn fill(viewport_size: Size) -> Self {
        Self::new(viewport_size, Point::ZERO, viewport_size)
    }

    /// Aspect-fits an image of `intrinsic` size into the viewport and centers it.
    ///
    /// Zero or non-finite dimensions are replaced with an epsilon so the aspect
    /// ratio never divides by zero.
    pub fn fit(intrinsic: Size, viewport_size: Size) -> Self {
        let width = non_degenerate(intrinsic.width);
        let height = non_degenerate(intrinsic.height);
        let viewport_width = non_degenerate(viewport_size.width);
        let viewport_height = non_degenerate(viewport_size.height);

        if width != intrinsic.width || height != intrinsic.height {
            log::warn!(
                "degenerate content size {}x{}, substituting epsilon",
                intrinsic.width,
                intrinsic.height
            );
        }

        let aspect = width / height;
        let viewport_aspect = viewport_width / viewport_height;
        let content_size = if aspect > viewport_aspect {
            Size::new(viewport_width, viewport_width / aspect)
        } else {
            Size::new(viewport_height * aspect, viewport_height)
        };
        let content_origin = Point::new(
            (viewport_width - content_size.width) / 2.0,
            (viewport_height - content_size.height) / 2.0,
        );

        Self::new(content_size, content_origin, viewport_size)
    }

    pub fn viewport_center(&self) -> Point {
        self.viewport_size.center()
    }
}

fn non_degenerate(value: f32) -> f32 {
    if value.is_finite() && value > GEOMETRY_EPSILON {
        value
    } else {
        GEOMETRY_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_fits_width_and_centers_vertically() {
        let geometry = ContentGeometry::fit(Size::new(2000.0, 1000.0), Size::new(1000.0, 2000.0));
        assert_eq!(geometry.content_size, Size::new(1000.0, 500.0));
        assert_eq!(geometry.content_origin, Point::new(0.0, 750.0));
    }

    #[test]
    fn tall_image_fits_height_and_centers_horizontally() {
        let geometry = ContentGeometry::fit(Size::new(500.0, 2000.0), Size::new(1000.0, 1000.0));
        assert_eq!(geometry.content_size, Size::new(250.0, 1000.0));
        assert_eq!(geometry.content_origin, Point::new(375.0, 0.0));
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let geometry = ContentGeometry::fit(Size::new(100.0, 0.0), Size::new(1000.0, 1000.0));
        assert!(geometry.content_size.width.is_finite());
        assert!(geometry.content_size.height.is_finite());
        assert!(geometry.content_origin.is_finite());
    }
}
