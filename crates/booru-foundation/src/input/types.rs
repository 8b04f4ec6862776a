use booru_ui_graphics::Point;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One contact point as reported by the platform for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub id: PointerId,
    pub position: Point,
    /// The contact lifted during this frame.
    pub released: bool,
}

impl Contact {
    pub fn pressed(id: PointerId, position: Point) -> Self {
        Self {
            id,
            position,
            released: false,
        }
    }

    pub fn released(id: PointerId, position: Point) -> Self {
        Self {
            id,
            position,
            released: true,
        }
    }
}

/// Per-pointer change between the previous frame and this one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInputChange {
    pub id: PointerId,
    pub uptime_ms: u64,
    pub position: Point,
    pub pressed: bool,
    pub previous_uptime_ms: u64,
    pub previous_position: Point,
    pub previous_pressed: bool,
}

impl PointerInputChange {
    pub fn changed_to_down(&self) -> bool {
        self.pressed && !self.previous_pressed
    }

    pub fn changed_to_up(&self) -> bool {
        !self.pressed && self.previous_pressed
    }

    /// Pressed in both frames, so its movement counts toward pan and zoom.
    pub fn is_tracked(&self) -> bool {
        self.pressed && self.previous_pressed
    }

    pub fn position_change(&self) -> Point {
        self.position - self.previous_position
    }

    pub fn position_changed(&self) -> bool {
        self.position != self.previous_position
    }
}

pub type PointerChanges = SmallVec<[PointerInputChange; 2]>;

/// A batch of pointer changes delivered together, with consumption tracking
/// for gesture disambiguation.
///
/// The image viewer consumes events it acts on. An outer pager receiving the
/// same event checks [`PointerEvent::is_consumed`] and only scrolls when the
/// viewer left the event alone.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub changes: PointerChanges,
    pub uptime_ms: u64,
    pub kind: PointerEventKind,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    /// Creates an event, deriving its kind from the changes it carries.
    pub fn new(changes: PointerChanges, uptime_ms: u64) -> Self {
        let kind = if changes.iter().any(PointerInputChange::changed_to_down) {
            PointerEventKind::Down
        } else if changes.iter().any(PointerInputChange::changed_to_up) {
            PointerEventKind::Up
        } else {
            PointerEventKind::Move
        };
        Self {
            changes,
            uptime_ms,
            kind,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_kind(mut self, kind: PointerEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Number of pointers still down after this event.
    pub fn pressed_count(&self) -> usize {
        self.changes.iter().filter(|change| change.pressed).count()
    }

    /// Number of pointers that were down in both the previous and this event.
    pub fn tracked_count(&self) -> usize {
        self.changes.iter().filter(|change| change.is_tracked()).count()
    }

    pub fn all_released(&self) -> bool {
        self.changes.iter().all(|change| !change.pressed)
    }

    pub fn any_changed_to_down(&self) -> bool {
        self.changes.iter().any(PointerInputChange::changed_to_down)
    }

    pub fn any_changed_to_up(&self) -> bool {
        self.changes.iter().any(PointerInputChange::changed_to_up)
    }

    /// True when some pointer that was down in both frames moved.
    pub fn has_tracked_motion(&self) -> bool {
        self.changes
            .iter()
            .any(|change| change.is_tracked() && change.position_changed())
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
