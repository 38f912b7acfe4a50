use crate::apps::PanelId;
use crate::geometry::Position;

/// What a pointer gesture is bound to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CaptureTarget {
    Panel(PanelId),
    /// Index into the desktop icon list.
    Icon(usize),
}

/// An in flight drag. `grab_offset` is the pointer position minus the target's position at
/// the moment of capture.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PointerCapture {
    target: CaptureTarget,
    grab_offset: Position,
    start: Position,
    moved: bool,
}

impl PointerCapture {
    pub fn target(&self) -> CaptureTarget {
        return self.target;
    }

    pub fn grab_offset(&self) -> Position {
        return self.grab_offset;
    }

    /// True once the pointer left the cell the gesture started on.
    pub fn moved(&self) -> bool {
        return self.moved;
    }
}

/// Holds at most one pointer capture.
#[derive(Clone, Debug, Default)]
pub struct CaptureSlot {
    current: Option<PointerCapture>,
}

impl CaptureSlot {
    pub fn new() -> Self {
        return Self { current: None };
    }

    /// Start a gesture, replacing any capture whose release was missed.
    pub fn acquire(&mut self, target: CaptureTarget, pointer: Position, origin: Position) {
        if let Some(stale) = self.current.take() {
            tracing::debug!("Replacing stale capture on {:?}", stale.target);
        }

        self.current = Some(PointerCapture {
            target,
            grab_offset: pointer - origin,
            start: pointer,
            moved: false,
        });
    }

    /// Where the target should be for a pointer at `pointer`. Marks the gesture as moved.
    pub fn drag_to(&mut self, pointer: Position) -> Option<(CaptureTarget, Position)> {
        let capture = self.current.as_mut()?;

        if pointer != capture.start {
            capture.moved = true;
        }

        return Some((capture.target, pointer - capture.grab_offset));
    }

    pub fn release(&mut self) -> Option<PointerCapture> {
        return self.current.take();
    }

    /// Drop the capture if it is bound to `target`.
    pub fn release_target(&mut self, target: CaptureTarget) -> bool {
        if self.current.map(|c| c.target) == Some(target) {
            self.current = None;
            return true;
        }

        return false;
    }

    pub fn current(&self) -> Option<&PointerCapture> {
        return self.current.as_ref();
    }

    pub fn is_captured(&self) -> bool {
        return self.current.is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::{CaptureSlot, CaptureTarget};
    use crate::apps::{AppKind, PanelId};
    use crate::geometry::Position;

    #[test]
    fn drag_keeps_grab_offset() {
        let mut slot = CaptureSlot::new();
        let target = CaptureTarget::Panel(PanelId::App(AppKind::Notes));

        slot.acquire(target, Position::new(14, 6), Position::new(10, 5));
        assert_eq!(slot.current().unwrap().grab_offset(), Position::new(4, 1));

        assert_eq!(
            slot.drag_to(Position::new(20, 9)),
            Some((target, Position::new(16, 8)))
        );
        assert!(slot.current().unwrap().moved());
    }

    #[test]
    fn only_one_capture_exists() {
        let mut slot = CaptureSlot::new();

        slot.acquire(CaptureTarget::Icon(1), Position::new(0, 0), Position::new(0, 0));
        slot.acquire(CaptureTarget::Icon(2), Position::new(3, 3), Position::new(0, 0));

        assert_eq!(slot.current().unwrap().target(), CaptureTarget::Icon(2));
        assert!(!slot.release_target(CaptureTarget::Icon(1)));
        assert!(slot.release_target(CaptureTarget::Icon(2)));
        assert!(!slot.is_captured());
        assert_eq!(slot.drag_to(Position::new(1, 1)), None);
    }

    #[test]
    fn staying_still_is_not_a_move() {
        let mut slot = CaptureSlot::new();

        slot.acquire(CaptureTarget::Icon(0), Position::new(5, 5), Position::new(2, 4));
        slot.drag_to(Position::new(5, 5));

        assert!(!slot.release().unwrap().moved());
    }
}
