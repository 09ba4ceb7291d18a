use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};
use seqdex_common::{Operation, Result, result::verify_position};

use crate::{
    Value,
    config::SequenceConfig,
    element::{Element, ElementArena, ElementId},
};

/// An ordered, mutable sequence of integers with constant-time positional
/// lookup.
///
/// Elements form a singly linked chain from `first` to `last`. Alongside the
/// chain, `index[i]` holds the handle of the element at position `i`, so that
/// `get` and locating the predecessor of a splice point never walk the chain.
/// Inserting or removing away from the ends shifts the tail of the index by
/// one slot.
///
/// The index capacity starts at [`SequenceConfig::initial_capacity`] and is
/// doubled before an insert that would find it full.
pub struct IndexedSequence {
    /// Element storage; every live slot is referenced by exactly one link.
    elements: ElementArena,
    first: Option<ElementId>,
    last: Option<ElementId>,
    /// Element handles in logical order; its length is the element count.
    index: Vec<ElementId>,
    /// Logical capacity of `index`, grown by doubling.
    capacity: usize,
}

impl IndexedSequence {
    /// Creates an empty sequence with the default configuration.
    pub fn new() -> IndexedSequence {
        Self::with_config(SequenceConfig::default())
    }

    /// Creates an empty sequence with the given configuration.
    pub fn with_config(config: SequenceConfig) -> IndexedSequence {
        let capacity = config.initial_capacity();
        IndexedSequence {
            elements: ElementArena::with_capacity_and_key(capacity),
            first: None,
            last: None,
            index: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the sequence contains no elements.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the current capacity of the random-access index.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `value` so that it ends up at `position`, shifting the elements
    /// at `position..` one place towards the end.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `position > len()`; the sequence is left unchanged.
    pub fn insert(&mut self, position: usize, value: Value) -> Result<()> {
        verify_position(Operation::Insert, position, self.len()).inspect_err(|e| debug!("{e}"))?;
        self.insert_unchecked(position, value);
        Ok(())
    }

    /// Appends `value` after the last element.
    pub fn push(&mut self, value: Value) {
        self.insert_unchecked(self.len(), value);
    }

    /// Removes the element at `position` and returns its value, shifting the
    /// elements after it one place towards the front.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `position >= len()`; the sequence is left unchanged.
    pub fn remove_at(&mut self, position: usize) -> Result<Value> {
        let len = self.len();
        verify_position(Operation::Remove, position, len).inspect_err(|e| debug!("{e}"))?;

        let id = self.index.remove(position);
        let next = self.elements[id].next;
        if position == 0 {
            self.first = next;
        } else {
            let prev = self.index[position - 1];
            self.elements[prev].next = next;
        }
        if position == len - 1 {
            self.last = position.checked_sub(1).map(|i| self.index[i]);
        }

        let value = self.elements[id].value;
        self.elements.remove(id);
        trace!("removed {value} at {position}, len {}", self.len());
        Ok(value)
    }

    /// Returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `position >= len()`.
    pub fn get(&self, position: usize) -> Result<Value> {
        verify_position(Operation::Get, position, self.len()).inspect_err(|e| debug!("{e}"))?;
        Ok(self.elements[self.index[position]].value)
    }

    /// Returns an iterator that walks the chain from the first element to the
    /// last.
    pub fn iter(&self) -> Traverse<'_> {
        Traverse {
            elements: &self.elements,
            next: self.first,
            remaining: self.len(),
        }
    }

    /// Removes all elements. The index capacity is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.index.clear();
        self.first = None;
        self.last = None;
    }

    /// Verifies the internal consistency of the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the chain, the index, and the element storage disagree.
    pub fn verify(&self) {
        let len = self.len();
        assert_eq!(self.elements.len(), len, "live elements != index length");
        assert!(len <= self.capacity, "index length exceeds its capacity");
        assert_eq!(self.first, self.index.first().copied(), "first != index[0]");
        assert_eq!(self.last, self.index.last().copied(), "last != index[len - 1]");

        let mut cursor = self.first;
        for (position, &id) in self.index.iter().enumerate() {
            assert_eq!(cursor, Some(id), "chain diverges from index at {position}");
            cursor = self.elements[id].next;
        }
        assert_eq!(cursor, None, "chain continues past the last element");
    }

    fn insert_unchecked(&mut self, position: usize, value: Value) {
        self.ensure_capacity();

        let len = self.len();
        let id = self.elements.insert(Element::new(value));
        if position == 0 {
            self.elements[id].next = self.first;
            self.first = Some(id);
            if len == 0 {
                self.last = Some(id);
            }
        } else if position == len {
            if let Some(last) = self.last {
                self.elements[last].next = Some(id);
            }
            self.last = Some(id);
        } else {
            let prev = self.index[position - 1];
            self.elements[id].next = self.elements[prev].next;
            self.elements[prev].next = Some(id);
        }

        self.index.insert(position, id);
        trace!("inserted {value} at {position}, len {}", self.len());
    }

    /// Doubles the index capacity if it cannot take one more element.
    fn ensure_capacity(&mut self) {
        let len = self.len();
        if len < self.capacity {
            return;
        }
        let capacity = self.capacity.saturating_mul(2).max(1);
        self.index.reserve_exact(capacity - len);
        debug!("index capacity grown from {} to {capacity}", self.capacity);
        self.capacity = capacity;
    }
}

impl Default for IndexedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IndexedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} -> ")?;
        }
        f.write_str("END")
    }
}

impl fmt::Debug for IndexedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedSequence")
            .field("values", &self.iter().collect::<Vec<_>>())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl FromIterator<Value> for IndexedSequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut seq = IndexedSequence::new();
        seq.extend(iter);
        seq
    }
}

impl Extend<Value> for IndexedSequence {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a> IntoIterator for &'a IndexedSequence {
    type Item = Value;
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Traverse<'a> {
        self.iter()
    }
}

/// Forward traversal over the values of an [`IndexedSequence`], following the
/// `next` links of the chain.
#[derive(Clone)]
pub struct Traverse<'a> {
    elements: &'a ElementArena,
    next: Option<ElementId>,
    remaining: usize,
}

impl Iterator for Traverse<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let id = self.next?;
        let element = &self.elements[id];
        self.next = element.next;
        self.remaining -= 1;
        Some(element.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Traverse<'_> {}

impl FusedIterator for Traverse<'_> {}
