/// Visual values the presentation layer derives from the combined
/// back/dismiss progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeStyle {
    /// Background scrim opacity.
    pub alpha: f32,
    pub content_scale: f32,
    pub corner_radius: f32,
    pub restored_fraction: f32,
}

/// Corner radius ceiling once the content has shrunk noticeably.
pub const MAX_CORNER_RADIUS: f32 = 12.0;

impl ChromeStyle {
    pub const SHOWN: ChromeStyle = ChromeStyle {
        alpha: 1.0,
        content_scale: 1.0,
        corner_radius: 0.0,
        restored_fraction: 1.0,
    };

    /// `combined_progress` is 1 when fully shown and 0 when fully dismissed.
    pub fn from_progress(combined_progress: f32, restored_fraction: f32) -> Self {
        let p = if combined_progress.is_finite() {
            combined_progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            alpha: (p * 5.0 - 4.0).clamp(0.0, 1.0),
            content_scale: p * 0.4 + 0.6,
            corner_radius: ((1.0 - p) * 128.0).min(MAX_CORNER_RADIUS),
            restored_fraction,
        }
    }
}

impl Default for ChromeStyle {
    fn default() -> Self {
        Self::SHOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_shown_has_no_chrome_effect() {
        assert_eq!(ChromeStyle::from_progress(1.0, 1.0), ChromeStyle::SHOWN);
    }

    #[test]
    fn scrim_fades_over_last_fifth() {
        let style = ChromeStyle::from_progress(0.9, 1.0);
        assert!((style.alpha - 0.5).abs() < 1e-5);
        assert_eq!(ChromeStyle::from_progress(0.8, 1.0).alpha, 0.0);
        assert_eq!(ChromeStyle::from_progress(0.2, 1.0).alpha, 0.0);
    }

    #[test]
    fn content_shrinks_and_rounds() {
        let style = ChromeStyle::from_progress(0.5, 0.5);
        assert!((style.content_scale - 0.8).abs() < 1e-5);
        assert_eq!(style.corner_radius, MAX_CORNER_RADIUS);
        assert_eq!(style.restored_fraction, 0.5);

        let nearly_shown = ChromeStyle::from_progress(0.96, 1.0);
        assert!((nearly_shown.corner_radius - 5.12).abs() < 1e-3);
    }
}
