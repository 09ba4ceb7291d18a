//! Element storage of a sequence.
//!
//! Elements live in a [`SlotMap`] addressed by versioned [`ElementId`] keys,
//! which take the place of pointers in the linked chain. A removed element's
//! slot is vacated at once; its key never resolves again, even after the slot
//! is reused.

use slotmap::SlotMap;

use crate::Value;

slotmap::new_key_type! {
    pub(crate) struct ElementId;
}

/// One stored value plus the link to its successor in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub(crate) value: Value,
    pub(crate) next: Option<ElementId>,
}

impl Element {
    pub(crate) fn new(value: Value) -> Self {
        Element { value, next: None }
    }
}

pub(crate) type ElementArena = SlotMap<ElementId, Element>;
