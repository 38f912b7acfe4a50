use std::collections::HashMap;
use std::hash::Hash;

pub type Depth = u64;

/// The counter value before anything is opened. The first record gets `BASE_DEPTH + 1`.
pub const BASE_DEPTH: Depth = 100;

/// Tracks which identities are open and how they are stacked.
///
/// Every open or focus assigns the next value of a counter that never decreases, so the most
/// recently focused identity always has the greatest depth and there is never more than one
/// record per identity.
#[derive(Clone, Debug)]
pub struct StackingCoordinator<I: Copy + Eq + Hash> {
    records: HashMap<I, Depth>,
    counter: Depth,
}

impl<I: Copy + Eq + Hash> StackingCoordinator<I> {
    pub fn new() -> Self {
        return Self {
            records: HashMap::new(),
            counter: BASE_DEPTH,
        };
    }

    fn bump(&mut self) -> Depth {
        self.counter += 1;
        return self.counter;
    }

    /// Create a record at the top, or move an existing one to the top. Returns the new depth.
    pub fn open(&mut self, id: I) -> Depth {
        let depth = self.bump();
        self.records.insert(id, depth);

        return depth;
    }

    /// Remove the record for `id`. Returns false if there was none.
    pub fn close(&mut self, id: I) -> bool {
        return self.records.remove(&id).is_some();
    }

    /// Move an open identity to the top. Identities without a record are ignored and the
    /// counter is left untouched.
    pub fn focus(&mut self, id: I) -> Option<Depth> {
        if !self.records.contains_key(&id) {
            return None;
        }

        return Some(self.open(id));
    }

    pub fn depth_of(&self, id: I) -> Option<Depth> {
        return self.records.get(&id).copied();
    }

    pub fn is_open(&self, id: I) -> bool {
        return self.records.contains_key(&id);
    }

    pub fn topmost(&self) -> Option<I> {
        return self
            .records
            .iter()
            .max_by_key(|(_, depth)| **depth)
            .map(|(id, _)| *id);
    }

    /// The current maximum depth, which is the counter once anything has been opened.
    pub fn current_max(&self) -> Depth {
        return self.counter;
    }

    pub fn len(&self) -> usize {
        return self.records.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.records.is_empty();
    }

    /// Open identities from the topmost down.
    pub fn stacking_order(&self) -> Vec<I> {
        let mut order = self.paint_order();
        order.reverse();

        return order;
    }

    /// Open identities from the bottom up, the order they are drawn in.
    pub fn paint_order(&self) -> Vec<I> {
        let mut records: Vec<(I, Depth)> = self.records.iter().map(|(i, d)| (*i, *d)).collect();
        records.sort_by_key(|(_, depth)| *depth);

        return records.into_iter().map(|(id, _)| id).collect();
    }
}

impl<I: Copy + Eq + Hash> Default for StackingCoordinator<I> {
    fn default() -> Self {
        return Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::{StackingCoordinator, BASE_DEPTH};

    #[test]
    fn open_refocus_scenario() {
        let mut stack = StackingCoordinator::new();

        assert_eq!(stack.open("a"), 101);
        assert_eq!(stack.open("b"), 102);
        assert_eq!(stack.open("a"), 103);

        assert_eq!(stack.stacking_order(), vec!["a", "b"]);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.topmost(), Some("a"));
    }

    #[test]
    fn focus_puts_panel_above_all_others() {
        let mut stack = StackingCoordinator::new();

        for id in 0..5 {
            stack.open(id);
        }

        for id in [3, 0, 4, 1].iter() {
            let depth = stack.focus(*id).unwrap();

            for other in 0..5 {
                if other != *id {
                    assert!(depth > stack.depth_of(other).unwrap());
                }
            }
        }
    }

    #[test]
    fn closed_panels_reopen_at_the_top() {
        let mut stack = StackingCoordinator::new();

        stack.open(1);
        stack.open(2);
        assert!(stack.close(1));
        assert!(!stack.close(1));
        assert!(!stack.is_open(1));

        assert_eq!(stack.open(1), 103);
        assert_eq!(stack.paint_order(), vec![2, 1]);
    }

    #[test]
    fn focusing_unknown_identity_does_nothing() {
        let mut stack: StackingCoordinator<u8> = StackingCoordinator::new();

        assert_eq!(stack.focus(7), None);
        assert_eq!(stack.current_max(), BASE_DEPTH);
        assert!(stack.is_empty());
        assert_eq!(stack.topmost(), None);
    }
}
