//! Gesture engine for a full-screen image viewer.
//!
//! Pinch-zoom, pan, double-tap zoom, drag-to-dismiss and predictive back,
//! reduced to a single-threaded state machine over pointer events. See
//! [`ImageViewer`] for the entry point.

pub mod chrome;
pub mod config;
pub mod dismiss;
pub mod gesture_loop;
pub mod host;
pub mod predictive_back;
pub mod smoothing;
pub mod transform_state;
pub mod viewer;

pub use chrome::ChromeStyle;
pub use config::{ConfigError, SettingsSource, ViewerConfig};
pub use dismiss::{DismissController, DismissProgress};
pub use gesture_loop::{GestureEffect, GestureEffects, GestureLoop, GesturePhase};
pub use host::{NoopHost, ViewerHost};
pub use predictive_back::{BackEvent, PredictiveBackBridge, BACK_REBOUND_EPSILON};
pub use smoothing::SmoothedTransform;
pub use transform_state::{sanitize_scale, TransformState};
pub use viewer::ImageViewer;

pub use booru_foundation::{ContentGeometry, PointerEvent, UptimeClock};

pub mod prelude {
    pub use crate::config::ViewerConfig;
    pub use crate::gesture_loop::{GestureEffect, GesturePhase};
    pub use crate::host::ViewerHost;
    pub use crate::predictive_back::BackEvent;
    pub use crate::viewer::ImageViewer;
    pub use booru_foundation::prelude::*;
}
