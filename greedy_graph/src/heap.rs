//! Binary min-heap over `(key, payload)` pairs.
//!
//! Entries live in a zero-indexed `Vec` laid out as an implicit complete
//! binary tree:
//!
//! - `parent(i) = (i - 1) / 2`
//! - `left(i) = 2i + 1`
//! - `right(i) = 2i + 2`
//!
//! For every non-root index `i`, `key(i) >= key(parent(i))`. Only keys are
//! compared. Equal keys may coexist and their relative extraction order is
//! unspecified, which is what lets the graph algorithms push a node again
//! instead of decreasing its key in place.

use std::cmp::Ordering;

use crate::{GraphError, Result};

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
const fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
const fn right(index: usize) -> usize {
    2 * index + 2
}

/// Min-heap keyed on `K`, carrying an opaque payload `P`.
///
/// Keys only need [`PartialOrd`]. Every comparison is a strict `<`, so two
/// incomparable keys (such as a NaN weight) never cause a swap.
#[derive(Debug, Clone)]
pub struct PairHeap<K, P> {
    entries: Vec<(K, P)>,
}

impl<K, P> Default for PairHeap<K, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialOrd, P> PairHeap<K, P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The minimum entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(&K, &P)> {
        self.entries.first().map(|(k, p)| (k, p))
    }

    /// Entries in array order. Only the heap invariant holds, not sorting.
    #[must_use]
    pub fn entries(&self) -> &[(K, P)] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Insert an entry. O(log n).
    pub fn insert(&mut self, key: K, payload: P) {
        self.entries.push((key, payload));
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the entry with the smallest key. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyStructure`] if the heap has no entries.
    pub fn extract_min(&mut self) -> Result<(K, P)> {
        if self.entries.is_empty() {
            return Err(GraphError::EmptyStructure);
        }
        self.remove(0)
    }

    /// Replace the key at `index` and restore heap order.
    ///
    /// A smaller key sifts up, anything else sifts down.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidIndex`] if `index >= len`.
    pub fn update_at(&mut self, index: usize, new_key: K) -> Result<()> {
        self.check_index(index)?;
        let decreased = new_key < self.entries[index].0;
        self.entries[index].0 = new_key;
        if decreased {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    /// Remove the entry at `index` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidIndex`] if `index >= len`.
    pub fn delete_at(&mut self, index: usize) -> Result<(K, P)> {
        self.check_index(index)?;
        self.remove(index)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Caller guarantees `index < len`.
    fn remove(&mut self, index: usize) -> Result<(K, P)> {
        let last = self.entries.len() - 1;
        self.entries.swap(index, last);
        let removed = self.entries.pop().ok_or(GraphError::EmptyStructure)?;
        if index < self.entries.len() {
            // The entry moved in from the end may belong above or below `index`.
            let settled = self.sift_down(index);
            if settled == index {
                self.sift_up(index);
            }
        }
        Ok(removed)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            if self.entries[index].0 < self.entries[p].0 {
                self.entries.swap(index, p);
                index = p;
            } else {
                break;
            }
        }
    }

    /// Returns the index the entry came to rest at.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.entries.len();
        loop {
            let l = left(index);
            let r = right(index);
            let mut smallest = index;

            // Strict comparisons keep the left child on ties.
            if l < len && self.entries[l].0 < self.entries[smallest].0 {
                smallest = l;
            }
            if r < len && self.entries[r].0 < self.entries[smallest].0 {
                smallest = r;
            }

            if smallest == index {
                return index;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }

    /// Whether every entry's key is no smaller than its parent's.
    #[must_use]
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.entries.len()).all(|i| {
            !matches!(
                self.entries[i].0.partial_cmp(&self.entries[parent(i)].0),
                Some(Ordering::Less)
            )
        })
    }
}

impl<K: PartialOrd, P> Extend<(K, P)> for PairHeap<K, P> {
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, payload) in iter {
            self.insert(key, payload);
        }
    }
}

impl<K: PartialOrd, P> FromIterator<(K, P)> for PairHeap<K, P> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
