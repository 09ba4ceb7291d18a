use std::fmt;
use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if the error reports a position outside the valid range
    /// of a sequence operation.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Creates an `OutOfRange` error for a position that does not fit the
    /// valid range of `operation` on a sequence holding `len` elements.
    ///
    /// The position is signed so that callers parsing user input can report
    /// negative positions through the same error.
    pub fn out_of_range(operation: Operation, position: i64, len: usize) -> Error {
        Error(
            ErrorKind::OutOfRange {
                operation,
                position,
                len,
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_command(command: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidCommand {
                command: command.into(),
            }
            .into(),
        )
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        Error(
            ErrorKind::Io {
                context: context.into(),
                source,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error(
        "position {position} is out of range for {operation} (valid: {})",
        operation.display_range(*len))]
    OutOfRange {
        operation: Operation,
        position: i64,
        len: usize,
    },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid command '{command}'")]
    InvalidCommand { command: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

/// Positional sequence operation, used to describe which range a position
/// was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Remove,
    Get,
}

impl Operation {
    /// The half-open range of positions accepted by this operation on a
    /// sequence of `len` elements.
    ///
    /// An insert may target one past the last element; removal and lookup
    /// must address an existing one.
    pub fn valid_range(self, len: usize) -> Range<usize> {
        match self {
            Operation::Insert => 0..len.saturating_add(1),
            Operation::Remove | Operation::Get => 0..len,
        }
    }

    fn display_range(self, len: usize) -> String {
        let range = self.valid_range(len);
        if range.is_empty() {
            "none".to_string()
        } else {
            format!("0..={}", range.end - 1)
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Insert => "insert",
            Operation::Remove => "remove",
            Operation::Get => "get",
        };
        f.write_str(name)
    }
}
