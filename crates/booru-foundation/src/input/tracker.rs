//! Builds [`PointerEvent`]s from raw per-frame contact lists.
//!
//! The platform reports the set of contacts for every frame. The tracker
//! remembers where each contact was last frame so every change carries its
//! previous position, which pan and zoom need. A contact that vanishes
//! without a release (an OS-level cancellation, a dropped touch) is reported
//! once as an implicit release at its last known position.

use super::types::{
    Contact, PointerChanges, PointerEvent, PointerEventKind, PointerId, PointerInputChange,
};
use crate::clock::UptimeClock;
use booru_ui_graphics::Point;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedPointer {
    id: PointerId,
    position: Point,
    uptime_ms: u64,
}

/// Tracks pointers that are currently down, keyed by pointer ID.
#[derive(Debug, Default)]
pub struct PointerTracker {
    pointers: SmallVec<[TrackedPointer; 2]>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pointers currently down.
    pub fn tracked_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pointers.is_empty()
    }

    fn find(&self, id: PointerId) -> Option<TrackedPointer> {
        self.pointers.iter().copied().find(|pointer| pointer.id == id)
    }

    /// Converts one frame of contacts into a pointer event.
    ///
    /// Returns `None` when the frame carries nothing the tracker can report,
    /// e.g. a release for a pointer that was never seen going down.
    pub fn process(&mut self, uptime_ms: u64, contacts: &[Contact]) -> Option<PointerEvent> {
        let mut changes = PointerChanges::new();

        for contact in contacts {
            if changes.iter().any(|change| change.id == contact.id) {
                log::warn!("duplicate contact {} in one frame, ignoring", contact.id);
                continue;
            }

            match self.find(contact.id) {
                Some(previous) => changes.push(PointerInputChange {
                    id: contact.id,
                    uptime_ms,
                    position: contact.position,
                    pressed: !contact.released,
                    previous_uptime_ms: previous.uptime_ms,
                    previous_position: previous.position,
                    previous_pressed: true,
                }),
                None if contact.released => {
                    log::debug!("release for untracked pointer {}", contact.id);
                }
                None => changes.push(PointerInputChange {
                    id: contact.id,
                    uptime_ms,
                    position: contact.position,
                    pressed: true,
                    previous_uptime_ms: uptime_ms,
                    previous_position: contact.position,
                    previous_pressed: false,
                }),
            }
        }

        for pointer in &self.pointers {
            if contacts.iter().all(|contact| contact.id != pointer.id) {
                log::warn!(
                    "pointer {} disappeared without a release; treating it as released",
                    pointer.id
                );
                changes.push(implicit_release(pointer, uptime_ms));
            }
        }

        self.pointers = changes
            .iter()
            .filter(|change| change.pressed)
            .map(|change| TrackedPointer {
                id: change.id,
                position: change.position,
                uptime_ms,
            })
            .collect();

        if changes.is_empty() {
            None
        } else {
            Some(PointerEvent::new(changes, uptime_ms))
        }
    }

    /// [`PointerTracker::process`] stamped with the clock's current uptime.
    pub fn process_now(
        &mut self,
        clock: &UptimeClock,
        contacts: &[Contact],
    ) -> Option<PointerEvent> {
        self.process(clock.now_ms(), contacts)
    }

    /// Releases every tracked pointer, e.g. when the platform cancels the
    /// whole gesture.
    pub fn cancel_all(&mut self, uptime_ms: u64) -> Option<PointerEvent> {
        if self.pointers.is_empty() {
            return None;
        }
        let changes: PointerChanges = self
            .pointers
            .iter()
            .map(|pointer| implicit_release(pointer, uptime_ms))
            .collect();
        self.pointers.clear();
        Some(PointerEvent::new(changes, uptime_ms).with_kind(PointerEventKind::Cancel))
    }
}

fn implicit_release(pointer: &TrackedPointer, uptime_ms: u64) -> PointerInputChange {
    PointerInputChange {
        id: pointer.id,
        uptime_ms,
        position: pointer.position,
        pressed: false,
        previous_uptime_ms: pointer.uptime_ms,
        previous_position: pointer.position,
        previous_pressed: true,
    }
}
