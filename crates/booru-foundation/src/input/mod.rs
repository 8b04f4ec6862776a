pub mod tracker;
pub mod types;

pub use tracker::PointerTracker;
pub use types::{
    Contact, PointerChanges, PointerEvent, PointerEventKind, PointerId, PointerInputChange,
};

pub mod prelude {
    pub use super::types::{Contact, PointerEvent, PointerEventKind, PointerId};
}
