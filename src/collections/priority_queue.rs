//! Array-backed binary min-heap with an injected comparator
//!
//! The element that compares `Less` against all others is popped first.
//! Ties pop in unspecified order, and duplicates are never merged: the
//! distance transform pushes the same pixel many times and discards stale
//! entries on pop.
//!
//! Author: Moroya Sakamoto

use std::cmp::Ordering;

/// Min-priority queue ordered by a comparison closure.
pub struct PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    compare: C,
}

impl<T: Ord> PriorityQueue<T, fn(&T, &T) -> Ordering> {
    /// Queue ordered by `T`'s own `Ord` (smallest first).
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord> Default for PriorityQueue<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Empty queue ordered by `compare`.
    pub fn with_comparator(compare: C) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Empty queue with room for `capacity` items before the first growth.
    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Number of queued items (stale duplicates included).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current backing capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Insert an item. Amortized O(log n).
    pub fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            // double on overflow
            let extra = self.items.capacity().max(1);
            self.items.reserve_exact(extra);
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum item, or `None` when empty.
    pub fn try_pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// The minimum item without removing it.
    #[inline]
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// Drop every queued item, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a], &self.items[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = index * 2 + 1;
            let right = left + 1;
            let mut min = index;

            if left < len && self.less(left, min) {
                min = left;
            }
            if right < len && self.less(right, min) {
                min = right;
            }
            if min == index {
                break;
            }
            self.items.swap(index, min);
            index = min;
        }
    }
}

impl<T, C> std::fmt::Debug for PriorityQueue<T, C>
where
    T: std::fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.items.len())
            .field("min", &self.items.first())
            .finish()
    }
}
