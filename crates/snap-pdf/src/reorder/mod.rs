//! Drag-to-reorder interaction
//!
//! Pointer drags and touch drags arrive through different event streams
//! but end in the same operation: `Collection::move_to`. Both gesture
//! adapters drive one [`ReorderSession`], which owns the active index and
//! cancels itself when the collection changes behind its back.
//!
//! Nothing here knows about widgets. The presentation layer feeds events
//! in, applies visuals from the returned [`DragSignal`], and answers hit
//! tests through [`HitTest`].

mod pointer;
mod touch;

pub use pointer::PointerDrag;
pub use touch::TouchDrag;

use crate::collection::Collection;

/// A position in presentation coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What a drag event did, for the presentation layer to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSignal {
    /// A thumbnail was picked up; style it as lifted
    Lifted { index: usize, haptic: bool },
    /// The lifted item moved; it now sits at `to`
    Moved { from: usize, to: usize },
    /// The gesture ended; `index` is where the lifted item came to rest
    Settled { index: Option<usize> },
    /// The collection changed outside the drag; the gesture was dropped
    Cancelled,
    /// The event had no effect
    Ignored,
}

/// Finds the reorderable targets under a point.
///
/// Implemented by the presentation layer. Indices are returned topmost
/// first, the way a stacked hit test would report them.
pub trait HitTest {
    fn targets_at(&self, point: Point) -> Vec<usize>;
}

impl<F> HitTest for F
where
    F: Fn(Point) -> Vec<usize>,
{
    fn targets_at(&self, point: Point) -> Vec<usize> {
        self(point)
    }
}

/// Reorder state shared by both gesture paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ReorderSession {
    active: Option<usize>,
    revision: u64,
}

impl ReorderSession {
    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }

    pub(crate) fn lift<T>(&mut self, index: usize, collection: &Collection<T>) -> DragSignal {
        if index >= collection.len() {
            self.active = None;
            return DragSignal::Ignored;
        }
        self.active = Some(index);
        self.revision = collection.revision();
        DragSignal::Lifted {
            index,
            haptic: false,
        }
    }

    /// The lifted item passed over `target`: move it there immediately.
    pub(crate) fn cross<T>(&mut self, target: usize, collection: &mut Collection<T>) -> DragSignal {
        let Some(active) = self.active else {
            return DragSignal::Ignored;
        };
        if self.is_stale(collection) {
            log::debug!("Collection changed during drag, cancelling");
            self.active = None;
            return DragSignal::Cancelled;
        }
        if target == active || !collection.move_to(active, target) {
            return DragSignal::Ignored;
        }
        self.active = Some(target);
        self.revision = collection.revision();
        DragSignal::Moved {
            from: active,
            to: target,
        }
    }

    pub(crate) fn settle<T>(&mut self, collection: &Collection<T>) -> DragSignal {
        let stale = self.is_stale(collection);
        let index = self.active.take().filter(|_| !stale);
        DragSignal::Settled { index }
    }

    pub(crate) fn cancel(&mut self) {
        self.active = None;
    }

    fn is_stale<T>(&self, collection: &Collection<T>) -> bool {
        match self.active {
            Some(active) => collection.revision() != self.revision || active >= collection.len(),
            None => false,
        }
    }
}
