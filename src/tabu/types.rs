//! Short-term memory for Tabu Search.

use std::collections::{HashSet, VecDeque};

use crate::neighborhood::SwapMove;

/// Bounded FIFO of recently used moves.
///
/// Once full, each push evicts the oldest entry. A capacity of zero stores
/// nothing, so no move is ever tabu.
///
/// # Examples
///
/// ```
/// use tsp_search::neighborhood::SwapMove;
/// use tsp_search::tabu::TabuList;
///
/// let mut list = TabuList::new(1);
/// list.push(SwapMove::new(0, 1));
/// let evicted = list.push(SwapMove::new(2, 3));
/// assert_eq!(evicted, Some(SwapMove::new(0, 1)));
/// assert!(!list.contains(&SwapMove::new(0, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    // Queue for ordering, set for O(1) lookup.
    queue: VecDeque<SwapMove>,
    set: HashSet<SwapMove>,
}

impl TabuList {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
        }
    }

    /// Appends `mv`, returning the entry evicted to make room, if any.
    pub fn push(&mut self, mv: SwapMove) -> Option<SwapMove> {
        if self.capacity == 0 {
            return None;
        }

        let evicted = if self.queue.len() >= self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        if let Some(old) = evicted {
            // A repeated move may still be queued further back.
            if !self.queue.contains(&old) {
                self.set.remove(&old);
            }
        }

        self.queue.push_back(mv);
        self.set.insert(mv);
        evicted
    }

    /// Whether `mv` is currently forbidden.
    pub fn contains(&self, mv: &SwapMove) -> bool {
        self.set.contains(mv)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Moves from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &SwapMove> {
        self.queue.iter()
    }
}
