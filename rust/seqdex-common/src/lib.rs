//! Core definitions (error type and argument verification), relied upon by all seqdex-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind, Operation};
pub use result::Result;
