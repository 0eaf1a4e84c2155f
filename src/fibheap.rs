// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A Fibonacci minimum heap with decrease-key.
//!
//! Nodes live in an index arena; all of the parent, child, and
//! sibling structure is expressed as arena indices rather than owned
//! pointers, which sidesteps the ownership tangle a linked heap
//! otherwise causes.  Siblings form circular doubly-linked rings.
//! `insert` and `decrease_key` are amortized O(1); `extract_min` pays
//! the deferred bill by consolidating the root list.

use crate::heap::{Handle, Heap};

struct FibNode<K, V> {
    // `None` once the entry has been extracted; the slot is then on
    // the free list awaiting reuse.
    entry: Option<(K, V)>,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    marked: bool,
}

/// Fibonacci heap variant.
pub struct FibonacciHeap<K: Ord, V> {
    nodes: Vec<FibNode<K, V>>,
    free: Vec<usize>,
    min: Option<usize>,
    len: usize,
}

impl<K: Ord, V> FibonacciHeap<K, V> {
    pub fn new() -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }

    fn key(&self, id: usize) -> &K {
        &self.nodes[id].entry.as_ref().expect("stale heap handle").0
    }

    fn alloc(&mut self, key: K, value: V) -> usize {
        let node = FibNode {
            entry: Some((key, value)),
            parent: None,
            child: None,
            left: 0,
            right: 0,
            degree: 0,
            marked: false,
        };
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    // Splice a detached node into the root ring, updating the minimum
    // pointer if the newcomer is cheaper.
    fn add_root(&mut self, id: usize) {
        self.nodes[id].parent = None;
        match self.min {
            None => {
                self.nodes[id].left = id;
                self.nodes[id].right = id;
                self.min = Some(id);
            }
            Some(min) => {
                let right = self.nodes[min].right;
                self.nodes[min].right = id;
                self.nodes[id].left = min;
                self.nodes[id].right = right;
                self.nodes[right].left = id;
                if self.key(id) < self.key(min) {
                    self.min = Some(id);
                }
            }
        }
    }

    // Remove a node from whatever sibling ring it is in, leaving it a
    // singleton ring.
    fn unlink(&mut self, id: usize) {
        let left = self.nodes[id].left;
        let right = self.nodes[id].right;
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[id].left = id;
        self.nodes[id].right = id;
    }

    // Detach `child` from `parent`'s child ring, clearing its mark.
    fn detach_child(&mut self, parent: usize, child: usize) {
        let right = self.nodes[child].right;
        if right == child {
            self.nodes[parent].child = None;
        } else {
            self.nodes[parent].child = Some(right);
        }
        self.unlink(child);
        self.nodes[parent].degree -= 1;
        self.nodes[child].parent = None;
        self.nodes[child].marked = false;
    }

    // Make `loser` (the larger key) a child of `winner`.
    fn link(&mut self, loser: usize, winner: usize) {
        self.nodes[loser].parent = Some(winner);
        self.nodes[loser].marked = false;
        match self.nodes[winner].child {
            None => {
                self.nodes[loser].left = loser;
                self.nodes[loser].right = loser;
                self.nodes[winner].child = Some(loser);
            }
            Some(child) => {
                let right = self.nodes[child].right;
                self.nodes[child].right = loser;
                self.nodes[loser].left = child;
                self.nodes[loser].right = right;
                self.nodes[right].left = loser;
            }
        }
        self.nodes[winner].degree += 1;
    }

    // Merge roots of equal degree until every degree appears at most
    // once, then rebuild the root ring and the minimum pointer.
    fn consolidate(&mut self) {
        let mut roots = Vec::new();
        if let Some(start) = self.min {
            let mut id = start;
            loop {
                roots.push(id);
                id = self.nodes[id].right;
                if id == start {
                    break;
                }
            }
        }
        for &id in &roots {
            self.nodes[id].left = id;
            self.nodes[id].right = id;
        }

        let mut by_degree: Vec<Option<usize>> = Vec::new();
        for mut id in roots {
            // Skip roots already linked under a winner this round.
            if self.nodes[id].parent.is_some() {
                continue;
            }
            loop {
                let degree = self.nodes[id].degree;
                if by_degree.len() <= degree {
                    by_degree.resize(degree + 1, None);
                }
                match by_degree[degree].take() {
                    None => {
                        by_degree[degree] = Some(id);
                        break;
                    }
                    Some(other) => {
                        let (winner, loser) = if self.key(other) < self.key(id) {
                            (other, id)
                        } else {
                            (id, other)
                        };
                        self.link(loser, winner);
                        id = winner;
                    }
                }
            }
        }

        self.min = None;
        for id in by_degree.into_iter().flatten() {
            self.add_root(id);
        }
    }

    fn cut(&mut self, id: usize, parent: usize) {
        self.detach_child(parent, id);
        self.add_root(id);
    }

    // A parent losing its second child is cut loose itself, and the
    // loss propagates upward.
    fn cascading_cut(&mut self, id: usize) {
        if let Some(parent) = self.nodes[id].parent {
            if self.nodes[id].marked {
                self.cut(id, parent);
                self.cascading_cut(parent);
            } else {
                self.nodes[id].marked = true;
            }
        }
    }
}

impl<K: Ord, V> Default for FibonacciHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Heap<K, V> for FibonacciHeap<K, V> {
    fn peek_min(&self) -> Option<(&K, &V)> {
        self.min.map(|id| {
            let entry = self.nodes[id].entry.as_ref().expect("stale heap handle");
            (&entry.0, &entry.1)
        })
    }

    fn extract_min(&mut self) -> Option<(K, V)> {
        let min = self.min?;

        // Promote the minimum's children to roots.  Their keys are
        // all at least the minimum's, so the minimum pointer holds.
        while let Some(child) = self.nodes[min].child {
            self.detach_child(min, child);
            self.add_root(child);
        }

        let right = self.nodes[min].right;
        self.unlink(min);
        if right == min {
            self.min = None;
        } else {
            self.min = Some(right);
            self.consolidate();
        }

        self.len -= 1;
        let entry = self.nodes[min].entry.take();
        self.free.push(min);
        entry
    }

    fn insert(&mut self, key: K, value: V) -> Handle {
        let id = self.alloc(key, value);
        self.add_root(id);
        self.len += 1;
        Handle(id)
    }

    fn decrease_key(&mut self, handle: Handle, key: K) {
        let id = handle.0;
        {
            let entry = self.nodes[id].entry.as_mut().expect("stale heap handle");
            debug_assert!(key <= entry.0, "decrease_key may not raise a key");
            entry.0 = key;
        }
        if let Some(parent) = self.nodes[id].parent {
            if self.key(id) < self.key(parent) {
                self.cut(id, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if self.key(id) < self.key(min) {
                self.min = Some(id);
            }
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}
