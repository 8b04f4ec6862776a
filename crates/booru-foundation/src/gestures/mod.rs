pub mod boundary;
pub mod drag;
pub mod tap;
pub mod zoom;

pub use boundary::clamp_offset;
pub use drag::{drag_offset, elastic_drag_y, is_horizontal_swipe};
pub use tap::{double_tap_transform, TapClassifier, TapOutcome, TapState};
pub use zoom::{
    calculate_centroid, calculate_centroid_size, calculate_pan, calculate_zoom, resolve,
    Resolution, ResolveMode, ResolverInput,
};
