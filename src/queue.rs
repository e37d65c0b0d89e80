//! Array-backed binary min-heap.
//!
//! The queue orders entries by priority alone. Entries with equal priority come
//! out in whatever order the current heap shape dictates, so callers that need a
//! reproducible order must fold a secondary key into the priority (see
//! [`TieBreak`](crate::tree::TieBreak)).

use std::fmt;

#[derive(Debug, Clone)]
struct Entry<P, T> {
    priority: P,
    payload: T,
}

/// Minimum-priority queue.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, T> {
    entries: Vec<Entry<P, T>>,
}

impl<P, T> PriorityQueue<P, T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of queued entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Ord, T> PriorityQueue<P, T> {
    /// Insert `payload` keyed by `priority`. O(log n).
    pub fn enqueue(&mut self, priority: P, payload: T) {
        self.entries.push(Entry { priority, payload });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the entry with the smallest priority, or `None` when empty.
    /// O(log n).
    pub fn dequeue(&mut self) -> Option<(P, T)> {
        if self.entries.is_empty() {
            return None;
        }
        // swap_remove moves the last entry into the root slot
        let min = self.entries.swap_remove(0);
        self.sift_down(0);
        Some((min.priority, min.payload))
    }

    /// The entry `dequeue` would return next.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.entries.first().map(|e| (&e.priority, &e.payload))
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[idx].priority >= self.entries[parent].priority {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let n = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let smaller = if right < n && self.entries[right].priority < self.entries[left].priority
            {
                right
            } else {
                left
            };
            if self.entries[smaller].priority >= self.entries[idx].priority {
                break;
            }
            self.entries.swap(idx, smaller);
            idx = smaller;
        }
    }
}

impl<P: fmt::Display, T: fmt::Display> PriorityQueue<P, T> {
    /// Render the heap level by level, root first.
    pub fn draw_tree(&self) -> String {
        if self.entries.is_empty() {
            return "(empty)".to_string();
        }
        let levels = usize::BITS - self.entries.len().leading_zeros();
        let mut out = String::new();
        let mut idx = 0;
        for level in 0..levels {
            let gap = 1usize << (levels - level);
            out.push_str(&" ".repeat(gap - 2));
            for _ in 0..(1usize << level) {
                let Some(e) = self.entries.get(idx) else {
                    break;
                };
                out.push_str(&format!("{}[{}]", e.payload, e.priority));
                out.push_str(&" ".repeat(gap));
                idx += 1;
            }
            out.truncate(out.trim_end().len());
            out.push('\n');
        }
        out
    }
}

/// Linear rendering of the backing array: `payload[priority] - payload[priority]`.
impl<P: fmt::Display, T: fmt::Display> fmt::Display for PriorityQueue<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "{}[{}]", e.payload, e.priority)?;
        }
        Ok(())
    }
}

impl<P, T> Default for PriorityQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, T> Extend<(P, T)> for PriorityQueue<P, T> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, payload) in iter {
            self.enqueue(priority, payload);
        }
    }
}

impl<P: Ord, T> FromIterator<(P, T)> for PriorityQueue<P, T> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}
