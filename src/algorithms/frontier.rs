use crate::grid::Position;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// Exploration order policy shared by every search.
///
/// `priority` is only meaningful for ordered frontiers; queue and stack
/// variants ignore it.
pub trait Frontier {
    /// Push neighbors last-to-first so the first listed neighbor is popped
    /// first. Set by LIFO frontiers.
    const REVERSE_PUSH: bool = false;

    fn push(&mut self, pos: Position, priority: usize);
    fn pop(&mut self) -> Option<Position>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<Position>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn push(&mut self, pos: Position, _priority: usize) {
        self.queue.push_back(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<Position>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    const REVERSE_PUSH: bool = true;

    fn push(&mut self, pos: Position, _priority: usize) {
        self.stack.push(pos);
    }

    fn pop(&mut self) -> Option<Position> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Heap entry ordered by score, then by insertion sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    priority: usize,
    seq: u64,
    pos: Position,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest score first; equal scores come out in the order they went in.
///
/// Positions may be pushed more than once. Stale duplicates are left in the
/// heap and skipped by the search loop when popped.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, pos: Position, priority: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { priority, seq, pos }));
    }

    fn pop(&mut self) -> Option<Position> {
        self.heap.pop().map(|Reverse(entry)| entry.pos)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<Position> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut q = QueueFrontier::new();
        q.push(p(0, 0), 9);
        q.push(p(0, 1), 1);
        q.push(p(0, 2), 5);
        assert_eq!(q.len(), 3);
        assert_eq!(drain(&mut q), vec![p(0, 0), p(0, 1), p(0, 2)]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut s = StackFrontier::new();
        s.push(p(0, 0), 0);
        s.push(p(0, 1), 0);
        s.push(p(0, 2), 0);
        assert_eq!(drain(&mut s), vec![p(0, 2), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn test_only_stack_reverses_pushes() {
        assert!(StackFrontier::REVERSE_PUSH);
        assert!(!QueueFrontier::REVERSE_PUSH);
        assert!(!PriorityFrontier::REVERSE_PUSH);
    }

    #[test]
    fn test_priority_is_min_first_with_stable_ties() {
        let mut pq = PriorityFrontier::new();
        pq.push(p(1, 1), 3);
        pq.push(p(0, 0), 1);
        pq.push(p(2, 2), 3);
        pq.push(p(0, 1), 1);
        pq.push(p(5, 5), 0);
        assert_eq!(
            drain(&mut pq),
            vec![p(5, 5), p(0, 0), p(0, 1), p(1, 1), p(2, 2)]
        );
    }

    #[test]
    fn test_priority_keeps_duplicates() {
        let mut pq = PriorityFrontier::new();
        pq.push(p(1, 1), 7);
        pq.push(p(1, 1), 2);
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.pop(), Some(p(1, 1)));
        assert_eq!(pq.pop(), Some(p(1, 1)));
        assert_eq!(pq.pop(), None);
    }
}
