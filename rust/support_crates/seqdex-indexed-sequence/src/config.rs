use seqdex_common::{Result, verify_arg};

/// Number of index slots reserved by a new sequence.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Upper bound accepted for the initial index capacity.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Configuration of an [`IndexedSequence`](crate::IndexedSequence).
///
/// The random-access index starts with `initial_capacity` slots and doubles
/// its capacity whenever an insert finds it full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    initial_capacity: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        SequenceConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl SequenceConfig {
    /// Creates a configuration with the given initial index capacity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `1 <= initial_capacity <= MAX_INITIAL_CAPACITY`.
    pub fn with_initial_capacity(initial_capacity: usize) -> Result<Self> {
        verify_arg!(initial_capacity, initial_capacity > 0);
        verify_arg!(initial_capacity, initial_capacity <= MAX_INITIAL_CAPACITY);
        Ok(SequenceConfig { initial_capacity })
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}
