use super::{DragSignal, HitTest, Point, ReorderSession};
use crate::collection::Collection;

/// Touch drag: `Idle -> Dragging -> Idle`.
///
/// Touch input gets no enter/leave events, so every move hit-tests the
/// point under the finger. The lifted thumbnail floats centered on the
/// touch point until the finger lifts.
#[derive(Debug, Clone, Default)]
pub struct TouchDrag {
    session: ReorderSession,
    floating: Option<Point>,
}

impl TouchDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start<T>(
        &mut self,
        index: usize,
        point: Point,
        collection: &Collection<T>,
    ) -> DragSignal {
        match self.session.lift(index, collection) {
            DragSignal::Lifted { index, .. } => {
                self.floating = Some(point);
                DragSignal::Lifted {
                    index,
                    haptic: true,
                }
            }
            other => other,
        }
    }

    pub fn touch_move<T, H>(
        &mut self,
        point: Point,
        hit_test: &H,
        collection: &mut Collection<T>,
    ) -> DragSignal
    where
        H: HitTest + ?Sized,
    {
        let Some(active) = self.session.active() else {
            return DragSignal::Ignored;
        };
        self.floating = Some(point);

        let target = hit_test
            .targets_at(point)
            .into_iter()
            .find(|&index| index != active);

        match target {
            Some(index) => {
                let signal = self.session.cross(index, collection);
                if signal == DragSignal::Cancelled {
                    self.floating = None;
                }
                signal
            }
            None => DragSignal::Ignored,
        }
    }

    pub fn touch_end<T>(&mut self, collection: &Collection<T>) -> DragSignal {
        self.floating = None;
        self.session.settle(collection)
    }

    pub fn cancel(&mut self) {
        self.floating = None;
        self.session.cancel();
    }

    pub fn lifted_index(&self) -> Option<usize> {
        self.session.active()
    }

    /// Where the lifted thumbnail's center should be drawn
    pub fn floating_center(&self) -> Option<Point> {
        self.session.active().and(self.floating)
    }

    /// Default touch scrolling must stay off while a thumbnail is lifted
    pub fn suppresses_scroll(&self) -> bool {
        self.session.active().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.active().is_some()
    }
}
