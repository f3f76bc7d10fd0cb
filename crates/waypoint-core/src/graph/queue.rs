//! Binary min-heap ordered by a caller-supplied comparator.
//!
//! There is deliberately no decrease-key: callers that need to lower a
//! priority insert a fresh entry and skip the outdated one when it is
//! popped (see the Dijkstra solver).

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Result, WaypointError};

/// Push/pop counters recorded by a queue over its lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub pushes: u64,
    pub pops: u64,
    pub max_len: u64,
}

/// Minimum priority queue backed by a binary heap.
///
/// `compare` must be a total order over `T`; the element comparing
/// `Less` than all others is returned first.
pub struct MinQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    data: Vec<T>,
    compare: F,
    stats: QueueStats,
}

impl<T, F> MinQueue<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self::with_capacity(0, compare)
    }

    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        MinQueue {
            data: Vec::with_capacity(capacity),
            compare,
            stats: QueueStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    /// Drop all entries. Counters are kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Insert a value, O(log n).
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.stats.pushes += 1;
        let len = self.data.len() as u64;
        if len > self.stats.max_len {
            self.stats.max_len = len;
        }
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the minimum, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let min = self.data.pop();
        self.stats.pops += 1;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        min
    }

    /// Remove and return the minimum, failing with `EmptyQueue` when empty.
    pub fn extract_min(&mut self) -> Result<T> {
        self.pop().ok_or(WaypointError::EmptyQueue)
    }

    /// The minimum without removing it
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.less(idx, parent) {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T, F> std::fmt::Debug for MinQueue<T, F>
where
    T: std::fmt::Debug,
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinQueue")
            .field("len", &self.data.len())
            .field("min", &self.data.first())
            .field("stats", &self.stats)
            .finish()
    }
}
