// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An array-backed binary minimum heap with decrease-key.
//!
//! Entries live in an arena indexed by the handles given out at
//! insertion; the heap order itself is a separate vector of arena
//! ids.  A position table maps each id back to its slot in the heap
//! vector, which is what lets `decrease_key` find and re-float an
//! arbitrary entry in O(log n) without holding references into the
//! structure.

use crate::heap::{Handle, Heap};

/// Binary heap variant.  Simple and cache-friendly; `decrease_key`
/// and the extremes are all O(log n).
pub struct BinaryHeap<K: Ord, V> {
    // Heap-ordered arena ids.
    heap: Vec<usize>,
    // Arena of entries; `None` once extracted.
    entries: Vec<Option<(K, V)>>,
    // Arena id -> index into `heap`.  Stale for extracted entries,
    // but those are unreachable: their arena slot is `None`.
    positions: Vec<usize>,
}

impl<K: Ord, V> BinaryHeap<K, V> {
    pub fn new() -> Self {
        BinaryHeap {
            heap: Vec::new(),
            entries: Vec::new(),
            positions: Vec::new(),
        }
    }

    fn key(&self, id: usize) -> &K {
        &self.entries[id].as_ref().expect("stale heap handle").0
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = a;
        self.positions[self.heap[b]] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.key(self.heap[slot]) < self.key(self.heap[parent]) {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.heap.len() && self.key(self.heap[left]) < self.key(self.heap[smallest]) {
                smallest = left;
            }
            if right < self.heap.len() && self.key(self.heap[right]) < self.key(self.heap[smallest])
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<K: Ord, V> Default for BinaryHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Heap<K, V> for BinaryHeap<K, V> {
    fn peek_min(&self) -> Option<(&K, &V)> {
        self.heap.first().map(|&id| {
            let entry = self.entries[id].as_ref().expect("stale heap handle");
            (&entry.0, &entry.1)
        })
    }

    fn extract_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        let id = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.positions[self.heap[0]] = 0;
            self.sift_down(0);
        }
        self.entries[id].take()
    }

    fn insert(&mut self, key: K, value: V) -> Handle {
        let id = self.entries.len();
        self.entries.push(Some((key, value)));
        self.heap.push(id);
        self.positions.push(self.heap.len() - 1);
        self.sift_up(self.heap.len() - 1);
        Handle(id)
    }

    fn decrease_key(&mut self, handle: Handle, key: K) {
        let entry = self.entries[handle.0].as_mut().expect("stale heap handle");
        debug_assert!(key <= entry.0, "decrease_key may not raise a key");
        entry.0 = key;
        let slot = self.positions[handle.0];
        self.sift_up(slot);
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
