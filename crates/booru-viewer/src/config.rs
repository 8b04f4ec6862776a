//! Viewer configuration and its settings-store seam.

use booru_animation::AnimationType;
use booru_foundation::gesture_constants::{
    DEFAULT_DOUBLE_TAP_SCALE, DEFAULT_DOUBLE_TAP_TIMEOUT_MS, DEFAULT_MAX_SCALE,
    DISMISS_VELOCITY_THRESHOLD, MIN_SCALE, RECOMMENDED_DOUBLE_TAP_TIMEOUT_MS,
    SWIPE_VERTICAL_SLOP,
};

/// Tunables for the gesture engine. Construct with `Default` and override
/// with the `with_*` setters, then [`ViewerConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Maximum interval between the two taps of a double tap.
    pub double_tap_threshold_ms: u64,
    pub max_scale: f32,
    /// Scale a double tap zooms unzoomed content to.
    pub double_tap_scale: f32,
    /// Last-frame vertical movement (px per event frame) that dismisses on release.
    pub dismiss_velocity_threshold: f32,
    /// Fraction of viewport height over which dismiss progress goes 0 to 1.
    pub drag_threshold_fraction: f32,
    /// Fraction of viewport height a slow drag must pass to dismiss.
    pub dismiss_distance_fraction: f32,
    /// Fraction of viewport height the content can be pulled above its origin.
    pub max_drag_to_top_fraction: f32,
    /// Vertical window around the origin in which horizontal swipes go to the pager.
    pub swipe_vertical_slop: f32,
    /// How the presented transform moves toward its target after release.
    pub smoothing: AnimationType,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            double_tap_threshold_ms: DEFAULT_DOUBLE_TAP_TIMEOUT_MS,
            max_scale: DEFAULT_MAX_SCALE,
            double_tap_scale: DEFAULT_DOUBLE_TAP_SCALE,
            dismiss_velocity_threshold: DISMISS_VELOCITY_THRESHOLD,
            drag_threshold_fraction: 0.25,
            dismiss_distance_fraction: 1.0 / 6.0,
            max_drag_to_top_fraction: 0.25,
            swipe_vertical_slop: SWIPE_VERTICAL_SLOP,
            smoothing: AnimationType::default(),
        }
    }
}

impl ViewerConfig {
    pub fn with_double_tap_threshold_ms(mut self, threshold_ms: u64) -> Self {
        self.double_tap_threshold_ms = threshold_ms;
        self
    }

    pub fn with_max_scale(mut self, max_scale: f32) -> Self {
        self.max_scale = max_scale;
        self
    }

    pub fn with_double_tap_scale(mut self, double_tap_scale: f32) -> Self {
        self.double_tap_scale = double_tap_scale;
        self
    }

    pub fn with_dismiss_velocity_threshold(mut self, threshold: f32) -> Self {
        self.dismiss_velocity_threshold = threshold;
        self
    }

    pub fn with_smoothing(mut self, smoothing: AnimationType) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Reads the user-facing scalars from the settings store, falling back to
    /// defaults for anything unset.
    pub fn from_settings(settings: &impl SettingsSource) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            double_tap_threshold_ms: settings
                .double_tap_threshold_ms()
                .unwrap_or(defaults.double_tap_threshold_ms),
            max_scale: settings.max_scale().unwrap_or(defaults.max_scale),
            double_tap_scale: settings
                .double_tap_scale()
                .unwrap_or(defaults.double_tap_scale),
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.double_tap_threshold_ms == 0 {
            return Err(ConfigError::ZeroDoubleTapThreshold);
        }
        if !RECOMMENDED_DOUBLE_TAP_TIMEOUT_MS.contains(&self.double_tap_threshold_ms) {
            log::warn!(
                "double tap threshold {}ms is outside the recommended {:?}ms",
                self.double_tap_threshold_ms,
                RECOMMENDED_DOUBLE_TAP_TIMEOUT_MS
            );
        }

        let finite = [
            ("max_scale", self.max_scale),
            ("double_tap_scale", self.double_tap_scale),
            ("dismiss_velocity_threshold", self.dismiss_velocity_threshold),
            ("drag_threshold_fraction", self.drag_threshold_fraction),
            ("dismiss_distance_fraction", self.dismiss_distance_fraction),
            ("max_drag_to_top_fraction", self.max_drag_to_top_fraction),
            ("swipe_vertical_slop", self.swipe_vertical_slop),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        if self.max_scale < MIN_SCALE {
            return Err(ConfigError::MaxScaleBelowMinimum {
                max_scale: self.max_scale,
            });
        }
        if self.double_tap_scale <= MIN_SCALE || self.double_tap_scale > self.max_scale {
            return Err(ConfigError::DoubleTapScaleOutOfRange {
                double_tap_scale: self.double_tap_scale,
                max_scale: self.max_scale,
            });
        }
        if self.dismiss_velocity_threshold <= 0.0 {
            return Err(ConfigError::NonPositive {
                field: "dismiss_velocity_threshold",
            });
        }
        if self.swipe_vertical_slop < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "swipe_vertical_slop",
            });
        }

        let fractions = [
            ("drag_threshold_fraction", self.drag_threshold_fraction),
            ("dismiss_distance_fraction", self.dismiss_distance_fraction),
            ("max_drag_to_top_fraction", self.max_drag_to_top_fraction),
        ];
        for (field, value) in fractions {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::FractionOutOfRange { field, value });
            }
        }

        Ok(())
    }
}

/// Read side of the persisted settings store. Each value is optional;
/// unset values keep their defaults.
pub trait SettingsSource {
    fn double_tap_threshold_ms(&self) -> Option<u64>;

    fn max_scale(&self) -> Option<f32> {
        None
    }

    fn double_tap_scale(&self) -> Option<f32> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroDoubleTapThreshold,
    NonFinite { field: &'static str },
    NonPositive { field: &'static str },
    MaxScaleBelowMinimum { max_scale: f32 },
    DoubleTapScaleOutOfRange { double_tap_scale: f32, max_scale: f32 },
    FractionOutOfRange { field: &'static str, value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDoubleTapThreshold => {
                write!(f, "double tap threshold must be greater than 0ms")
            }
            ConfigError::NonFinite { field } => write!(f, "{field} must be finite"),
            ConfigError::NonPositive { field } => write!(f, "{field} must be positive"),
            ConfigError::MaxScaleBelowMinimum { max_scale } => {
                write!(f, "max scale {max_scale} is below {MIN_SCALE}")
            }
            ConfigError::DoubleTapScaleOutOfRange {
                double_tap_scale,
                max_scale,
            } => write!(
                f,
                "double tap scale {double_tap_scale} must be in ({MIN_SCALE}, {max_scale}]"
            ),
            ConfigError::FractionOutOfRange { field, value } => {
                write!(f, "{field} {value} must be in (0, 1]")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
