//! Disjoint-set forest with size-weighted union and compressing find.
//!
//! Each element maps to a record holding its stored representative, a tree
//! size and an optional payload. Following representatives from any element
//! reaches a leader `r` with `representative(r) == r`. Sizes are kept current
//! on leaders only; a non-leader's size is stale and is never read without a
//! fresh [`DisjointSetForest::find`].

use std::collections::HashMap;

use crate::{GraphError, NodeId, Result};

#[derive(Debug, Clone)]
struct SetRecord<E, D> {
    representative: E,
    tree_size: usize,
    payload: Option<D>,
}

impl<E, D> SetRecord<E, D> {
    const fn singleton(element: E) -> Self {
        Self {
            representative: element,
            tree_size: 1,
            payload: None,
        }
    }
}

/// Union-find over elements of type `E`, with optional per-element data `D`.
#[derive(Debug, Clone)]
pub struct DisjointSetForest<E, D = ()> {
    records: HashMap<E, SetRecord<E, D>>,
    compressed: bool,
}

impl<E: NodeId, D> Default for DisjointSetForest<E, D> {
    fn default() -> Self {
        Self::with_compression(true)
    }
}

impl<E: NodeId, D> DisjointSetForest<E, D> {
    /// Empty forest with path compression enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_compression(compressed: bool) -> Self {
        Self {
            records: HashMap::new(),
            compressed,
        }
    }

    /// One singleton set per element, path compression enabled.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateElement`] if an element repeats.
    pub fn from_elements<I: IntoIterator<Item = E>>(elements: I) -> Result<Self> {
        Self::from_elements_with_compression(elements, true)
    }

    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateElement`] if an element repeats.
    pub fn from_elements_with_compression<I: IntoIterator<Item = E>>(
        elements: I,
        compressed: bool,
    ) -> Result<Self> {
        let iter = elements.into_iter();
        let mut forest = Self::with_compression(compressed);
        forest.records.reserve(iter.size_hint().0);
        for element in iter {
            forest.make_set(element)?;
        }
        Ok(forest)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.records.contains_key(element)
    }

    #[must_use]
    pub const fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Add `element` as its own singleton set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateElement`] if it is already registered.
    pub fn make_set(&mut self, element: E) -> Result<()> {
        if self.records.contains_key(&element) {
            return Err(GraphError::duplicate(&element));
        }
        self.records
            .insert(element.clone(), SetRecord::singleton(element));
        Ok(())
    }

    fn record(&self, element: &E) -> Result<&SetRecord<E, D>> {
        self.records
            .get(element)
            .ok_or_else(|| GraphError::unknown(element))
    }

    fn record_mut(&mut self, element: &E) -> Result<&mut SetRecord<E, D>> {
        self.records
            .get_mut(element)
            .ok_or_else(|| GraphError::unknown(element))
    }

    /// Leader of the set containing `element`.
    ///
    /// With compression on, only the queried element is re-pointed at the
    /// leader; intermediate links are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if `element` is not registered.
    pub fn find(&mut self, element: &E) -> Result<E> {
        let first = self.record(element)?.representative.clone();
        let mut leader = first.clone();
        loop {
            let next = &self.record(&leader)?.representative;
            if *next == leader {
                break;
            }
            leader = next.clone();
        }

        if self.compressed && leader != first {
            self.record_mut(element)?.representative = leader.clone();
        }
        Ok(leader)
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The smaller tree's leader goes under the larger one's; on equal sizes
    /// `a`'s leader goes under `b`'s. Returns `false` if they already shared
    /// a set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if either is not registered.
    pub fn union(&mut self, a: &E, b: &E) -> Result<bool> {
        let leader_a = self.find(a)?;
        let leader_b = self.find(b)?;
        if leader_a == leader_b {
            return Ok(false);
        }

        let size_a = self.record(&leader_a)?.tree_size;
        let size_b = self.record(&leader_b)?.tree_size;
        let (child, survivor) = if size_a > size_b {
            (leader_b, leader_a)
        } else {
            (leader_a, leader_b)
        };

        self.record_mut(&child)?.representative = survivor.clone();
        self.record_mut(&survivor)?.tree_size = size_a + size_b;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if either is not registered.
    pub fn connected(&mut self, a: &E, b: &E) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the set containing `element`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if `element` is not registered.
    pub fn set_size(&mut self, element: &E) -> Result<usize> {
        let leader = self.find(element)?;
        Ok(self.record(&leader)?.tree_size)
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.records
            .iter()
            .filter(|(element, record)| record.representative == **element)
            .count()
    }

    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if `element` is not registered.
    pub fn attach_payload(&mut self, element: &E, data: D) -> Result<()> {
        self.record_mut(element)?.payload = Some(data);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GraphError::UnknownElement`] if `element` is not registered.
    pub fn payload_of(&self, element: &E) -> Result<Option<&D>> {
        Ok(self.record(element)?.payload.as_ref())
    }

    /// Each element's stored representative, without running any find.
    #[must_use]
    pub fn representatives(&self) -> HashMap<E, E> {
        self.records
            .iter()
            .map(|(element, record)| (element.clone(), record.representative.clone()))
            .collect()
    }

    /// Payloads of the elements that carry one.
    #[must_use]
    pub fn payloads(&self) -> HashMap<E, &D> {
        self.records
            .iter()
            .filter_map(|(element, record)| {
                record.payload.as_ref().map(|data| (element.clone(), data))
            })
            .collect()
    }
}
