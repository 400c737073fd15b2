use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::state::JointState;

/// Frontier entry, ordered by estimated total cost and then by insertion
/// order for a deterministic tie-break.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) f: i32,
    pub(crate) g: i32,
    pub(crate) seq: u64,
    pub(crate) state: JointState,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue without decrease-key: improved states are pushed again
/// and the outdated entries are skipped by the caller when popped.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, state: JointState, g: i32, f: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, g, seq, state });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pursuit_core::Point;

    fn st(x: i32) -> JointState {
        JointState::new(Point::new(x, 0), Point::new(x, 1))
    }

    #[test]
    fn pops_lowest_estimate_first() {
        let mut fr = Frontier::default();
        fr.push(st(0), 0, 7);
        fr.push(st(1), 0, 3);
        fr.push(st(2), 0, 5);
        let order: Vec<i32> = std::iter::from_fn(|| fr.pop()).map(|e| e.f).collect();
        assert_eq!(order, vec![3, 5, 7]);
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut fr = Frontier::default();
        for x in 0..5 {
            fr.push(st(x), x, 4);
        }
        assert_eq!(fr.len(), 5);
        let order: Vec<i32> = std::iter::from_fn(|| fr.pop())
            .map(|e| e.state.evader.x)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }
}
