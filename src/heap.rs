// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A minimum-priority heap interface with decrease-key.
//!
//! This module and its implementations ship alongside the carver but
//! are not part of the carving pipeline; nothing in the seam search
//! reads from or writes to a heap.  They share the repository as
//! general-purpose algorithmic stock.
//!
//! `insert` hands back an opaque [`Handle`] instead of a reference to
//! the stored node.  `decrease_key` then works through a stable
//! lookup on that handle, so the collection keeps sole ownership of
//! its nodes and callers keep only tickets.

/// A ticket for an inserted entry, redeemable at `decrease_key`.
/// Handles are only meaningful to the heap that issued them, and only
/// until the entry is extracted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Handle(pub(crate) usize);

/// The capability surface shared by the heap variants: peek at or
/// remove the minimum entry, add an entry, and lower the key of an
/// entry inserted earlier.
pub trait Heap<K: Ord, V> {
    /// The current minimum entry, if any, without removing it.
    fn peek_min(&self) -> Option<(&K, &V)>;

    /// Remove and return the minimum entry.
    fn extract_min(&mut self) -> Option<(K, V)>;

    /// Add an entry, returning a handle for later `decrease_key`
    /// calls.
    fn insert(&mut self, key: K, value: V) -> Handle;

    /// Lower the key of a previously inserted, not yet extracted
    /// entry.  The new key must not exceed the current one.
    fn decrease_key(&mut self, handle: Handle, key: K);

    /// Number of entries currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Scenario tests shared by every implementation, in the spirit of a
// single suite run against each variant.
#[cfg(test)]
pub(crate) mod scenarios {
    use super::Heap;

    pub fn basic<H: Heap<i64, &'static str>>(heap: &mut H) {
        assert!(heap.is_empty());
        assert!(heap.extract_min().is_none());

        heap.insert(10, "ten");
        let thirty = heap.insert(30, "thirty");
        heap.insert(20, "twenty");
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_min(), Some((&10, &"ten")));

        // Dropping "thirty" below the current minimum reorders the
        // extraction sequence.
        heap.decrease_key(thirty, 5);
        assert_eq!(heap.extract_min(), Some((5, "thirty")));
        assert_eq!(heap.extract_min(), Some((10, "ten")));
        assert_eq!(heap.extract_min(), Some((20, "twenty")));
        assert!(heap.extract_min().is_none());
    }

    pub fn insert_extract<H: Heap<u32, u32>>(heap: &mut H) {
        // 37 is coprime with 100, so this walk hits every residue.
        for i in 0..100u32 {
            let key = (i * 37) % 100;
            heap.insert(key, key);
        }
        for expected in 0..100u32 {
            assert_eq!(heap.extract_min(), Some((expected, expected)));
        }
        assert!(heap.is_empty());
    }

    pub fn interleaved<H: Heap<u32, u32>>(heap: &mut H) {
        let handles: Vec<_> = (0..16u32).map(|k| heap.insert(100 + k, k)).collect();
        assert_eq!(heap.extract_min(), Some((100, 0)));
        heap.decrease_key(handles[9], 1);
        heap.decrease_key(handles[4], 2);
        assert_eq!(heap.extract_min(), Some((1, 9)));
        assert_eq!(heap.extract_min(), Some((2, 4)));

        let mut previous = 0;
        while let Some((key, _)) = heap.extract_min() {
            assert!(key > previous);
            previous = key;
        }
    }
}
