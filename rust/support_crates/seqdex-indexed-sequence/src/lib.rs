//! An ordered, mutable sequence of integers backed by a singly linked chain of
//! elements and a parallel random-access index.
//!
//! The chain gives constant-time splicing at the head and tail, the index gives
//! constant-time lookup by position. Both are updated together on every
//! mutation.
//!
//! # Examples
//!
//! ```
//! use seqdex_indexed_sequence::IndexedSequence;
//!
//! let mut seq = IndexedSequence::new();
//! seq.insert(0, 10).unwrap();
//! seq.insert(1, 20).unwrap();
//! seq.insert(1, 15).unwrap();
//! assert_eq!(seq.get(1).unwrap(), 15);
//!
//! assert_eq!(seq.remove_at(0).unwrap(), 10);
//! assert_eq!(seq.to_string(), "15 -> 20 -> END");
//! assert!(seq.get(2).unwrap_err().is_out_of_range());
//! ```

pub mod config;
mod element;
pub mod sequence;


pub use config::SequenceConfig;
pub use sequence::{IndexedSequence, Traverse};

/// The scalar type stored in a sequence.
pub type Value = i32;
