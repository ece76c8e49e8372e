use super::{DragSignal, ReorderSession};
use crate::collection::Collection;

/// Pointer (mouse) drag: `Idle -> Dragging -> Idle`.
///
/// Reordering happens live as the pointer enters other thumbnails, so the
/// drop location does not matter.
#[derive(Debug, Clone, Default)]
pub struct PointerDrag {
    session: ReorderSession,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_start<T>(&mut self, index: usize, collection: &Collection<T>) -> DragSignal {
        self.session.lift(index, collection)
    }

    pub fn drag_enter<T>(&mut self, index: usize, collection: &mut Collection<T>) -> DragSignal {
        self.session.cross(index, collection)
    }

    pub fn drag_end<T>(&mut self, collection: &Collection<T>) -> DragSignal {
        self.session.settle(collection)
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Index of the thumbnail currently styled as lifted
    pub fn lifted_index(&self) -> Option<usize> {
        self.session.active()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.active().is_some()
    }
}
