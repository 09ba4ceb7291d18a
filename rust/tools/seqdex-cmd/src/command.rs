//! Parsing of command lines entered at the prompt.

use std::str::FromStr;

use seqdex_common::{Error, Result};
use seqdex_indexed_sequence::Value;

/// A single command of the interactive loop.
///
/// Positions are kept signed here; a negative position is reported as out of
/// range by the session rather than as a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert { position: i64, value: Value },
    Remove { position: i64 },
    Get { position: i64 },
    Print,
    Size,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    /// Parses a command name (or its numeric menu choice) followed by its
    /// arguments, separated by whitespace. Names are case-insensitive.
    fn from_str(line: &str) -> Result<Command> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(Error::invalid_command(""));
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "insert" | "1" => Command::Insert {
                position: parse_position(tokens.next())?,
                value: parse_arg(tokens.next(), "value")?,
            },
            "remove" | "2" => Command::Remove {
                position: parse_position(tokens.next())?,
            },
            "get" | "3" => Command::Get {
                position: parse_position(tokens.next())?,
            },
            "print" | "4" => Command::Print,
            "size" | "5" => Command::Size,
            "help" | "h" | "?" => Command::Help,
            "quit" | "exit" | "q" | "0" => Command::Quit,
            _ => return Err(Error::invalid_command(name)),
        };

        if let Some(extra) = tokens.next() {
            return Err(Error::invalid_arg(
                "arguments",
                format!("unexpected '{extra}'"),
            ));
        }
        Ok(command)
    }
}

/// Parses a position. An integer too large for `i64` saturates to `i64::MAX`
/// or `i64::MIN` so that it is rejected as out of range rather than as
/// malformed input.
fn parse_position(token: Option<&str>) -> Result<i64> {
    parse_arg(token, "position").or_else(|e| {
        let Some(token) = token else {
            return Err(e);
        };
        let (negative, digits) = match token.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, token.strip_prefix('+').unwrap_or(token)),
        };
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(if negative { i64::MIN } else { i64::MAX })
        } else {
            Err(e)
        }
    })
}

fn parse_arg<T: FromStr>(token: Option<&str>, name: &str) -> Result<T> {
    let token = token.ok_or_else(|| Error::invalid_arg(name, "missing"))?;
    token
        .parse()
        .map_err(|_| Error::invalid_arg(name, format!("'{token}' is not a valid integer")))
}
