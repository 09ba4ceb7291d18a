use crate::error::{Error, Operation};

pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

/// Checks `position` against the valid range of `operation` on a sequence of
/// `len` elements.
#[inline]
pub fn verify_position(operation: Operation, position: usize, len: usize) -> Result<()> {
    if operation.valid_range(len).contains(&position) {
        Ok(())
    } else {
        out_of_range(operation, position, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(Error::invalid_arg(name, condition))
}

#[cold]
fn out_of_range(operation: Operation, position: usize, len: usize) -> Result<()> {
    let position = i64::try_from(position).unwrap_or(i64::MAX);
    Err(Error::out_of_range(operation, position, len))
}
