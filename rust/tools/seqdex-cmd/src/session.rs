//! The interactive command loop driving one `IndexedSequence`.

use std::io::{self, BufRead, Write};

use log::debug;
use seqdex_common::{Error, ErrorKind, Operation, Result};
use seqdex_indexed_sequence::IndexedSequence;

use crate::command::Command;

const MENU: &str = "\
Commands:
  insert <position> <value>   (1)
  remove <position>           (2)
  get <position>              (3)
  print                       (4)
  size                        (5)
  help                        (h)
  quit                        (0)";

const PROMPT: &str = "> ";

/// What a successfully applied command asks the loop to do next.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Silent,
    Reply(String),
    Quit,
}

/// Owns the sequence for the duration of a command loop.
pub struct Session {
    sequence: IndexedSequence,
    interactive: bool,
}

impl Session {
    /// Creates a session over `sequence`. An interactive session prints the
    /// menu once and a prompt before every command.
    pub fn new(sequence: IndexedSequence, interactive: bool) -> Session {
        Session {
            sequence,
            interactive,
        }
    }

    #[cfg(test)]
    fn sequence(&self) -> &IndexedSequence {
        &self.sequence
    }

    /// Reads commands from `input` line by line until `quit` or end of input.
    ///
    /// Rejected commands are reported on `output` and the loop continues; only
    /// I/O failures end the session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        if self.interactive {
            writeln!(output, "{MENU}").map_err(output_error)?;
        }

        let mut line = Vec::new();
        let mut processed = 0usize;
        loop {
            if self.interactive {
                write!(output, "{PROMPT}").map_err(output_error)?;
                output.flush().map_err(output_error)?;
            }

            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(|e| Error::io("stdin", e))?;
            if read == 0 {
                break;
            }
            let parsed = std::str::from_utf8(&line)
                .map(str::trim)
                .map_err(|_| Error::invalid_arg("line", "is not valid UTF-8"));
            if parsed.as_ref().is_ok_and(|text| text.is_empty()) {
                continue;
            }

            processed += 1;
            match parsed
                .and_then(str::parse::<Command>)
                .and_then(|command| self.apply(command))
            {
                Ok(Outcome::Silent) => {}
                Ok(Outcome::Reply(text)) => writeln!(output, "{text}").map_err(output_error)?,
                Ok(Outcome::Quit) => break,
                Err(e) => self.report(e, output)?,
            }
        }

        debug!(
            "session finished after {processed} commands, {} elements left",
            self.sequence.len()
        );
        output.flush().map_err(output_error)
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        let len = self.sequence.len();
        let outcome = match command {
            Command::Insert { position, value } => {
                let position = to_position(Operation::Insert, position, len)?;
                self.sequence.insert(position, value)?;
                Outcome::Silent
            }
            Command::Remove { position } => {
                let position = to_position(Operation::Remove, position, len)?;
                self.sequence.remove_at(position)?;
                Outcome::Silent
            }
            Command::Get { position } => {
                let index = to_position(Operation::Get, position, len)?;
                let value = self.sequence.get(index)?;
                Outcome::Reply(format!("Value at index {position} = {value}"))
            }
            Command::Print => Outcome::Reply(self.sequence.to_string()),
            Command::Size => Outcome::Reply(format!("Current size: {len}")),
            Command::Help => Outcome::Reply(MENU.to_string()),
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    fn report<W: Write>(&self, error: Error, output: &mut W) -> Result<()> {
        debug!("command rejected: {error}");
        let message = match error.into_kind() {
            ErrorKind::OutOfRange { .. } => "invalid index".to_string(),
            ErrorKind::InvalidCommand { .. } => "invalid choice".to_string(),
            ErrorKind::InvalidArgument { name, message } => {
                format!("invalid input: {name} {message}")
            }
            kind @ ErrorKind::Io { .. } => return Err(kind.into()),
        };
        writeln!(output, "{message}").map_err(output_error)
    }
}

fn to_position(operation: Operation, position: i64, len: usize) -> Result<usize> {
    usize::try_from(position).map_err(|_| Error::out_of_range(operation, position, len))
}

fn output_error(e: io::Error) -> Error {
    Error::io("stdout", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqdex_indexed_sequence::SequenceConfig;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn quiet_session() -> Session {
        Session::new(IndexedSequence::new(), false)
    }

    #[test]
    fn test_scenario() {
        let mut session = quiet_session();
        let output = run_script(
            &mut session,
            "insert 0 10\ninsert 1 20\ninsert 1 15\nprint\nget 1\nremove 0\nprint\nsize\n",
        );
        assert_eq!(
            output,
            "10 -> 15 -> 20 -> END\n\
             Value at index 1 = 15\n\
             15 -> 20 -> END\n\
             Current size: 2\n"
        );
        session.sequence().verify();
    }

    #[test]
    fn test_menu_choices() {
        let mut session = quiet_session();
        let output = run_script(&mut session, "1 0 5\n1 1 6\n3 1\n2 0\n4\n5\n0\n");
        assert_eq!(
            output,
            "Value at index 1 = 6\n6 -> END\nCurrent size: 1\n"
        );
    }

    #[test]
    fn test_out_of_range_reports() {
        let mut session = quiet_session();
        let output = run_script(
            &mut session,
            "get 0\ninsert 5 1\nremove 0\ninsert -1 3\nget -2\nsize\nprint\n",
        );
        assert_eq!(
            output,
            "invalid index\ninvalid index\ninvalid index\ninvalid index\ninvalid index\n\
             Current size: 0\nEND\n"
        );
        assert!(session.sequence().is_empty());
    }

    #[test]
    fn test_invalid_input_continues() {
        let mut session = quiet_session();
        let output = run_script(&mut session, "frobnicate\ninsert 0\nget one\n\ninsert 0 1\nprint\n");
        assert_eq!(
            output,
            "invalid choice\n\
             invalid input: value missing\n\
             invalid input: position 'one' is not a valid integer\n\
             1 -> END\n"
        );
    }

    #[test]
    fn test_non_utf8_line_continues() {
        let mut session = quiet_session();
        let mut output = Vec::new();
        session
            .run(&b"insert 0 1\n\xff\xfe\nprint\n"[..], &mut output)
            .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "invalid input: line is not valid UTF-8\n1 -> END\n"
        );
        assert_eq!(session.sequence().len(), 1);
    }

    #[test]
    fn test_oversized_position_is_out_of_range() {
        let mut session = quiet_session();
        let output = run_script(
            &mut session,
            "insert 0 1\nget 99999999999999999999\nremove -99999999999999999999\n\
             insert 18446744073709551616 2\nprint\n",
        );
        assert_eq!(
            output,
            "invalid index\ninvalid index\ninvalid index\n1 -> END\n"
        );
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut session = quiet_session();
        let output = run_script(&mut session, "insert 0 1\nquit\ninsert 1 2\nprint\n");
        assert_eq!(output, "");
        assert_eq!(session.sequence().len(), 1);
    }

    #[test]
    fn test_interactive_prompt() {
        let mut session = Session::new(IndexedSequence::new(), true);
        let output = run_script(&mut session, "size\n");
        let expected = format!("{MENU}\n{PROMPT}Current size: 0\n{PROMPT}");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_help() {
        let mut session = quiet_session();
        let output = run_script(&mut session, "help\n");
        assert_eq!(output, format!("{MENU}\n"));
    }

    #[test]
    fn test_small_initial_capacity() {
        let config = SequenceConfig::with_initial_capacity(1).unwrap();
        let mut session = Session::new(IndexedSequence::with_config(config), false);
        let script: String = (0..10).map(|i| format!("insert 0 {i}\n")).collect();
        run_script(&mut session, &script);
        assert_eq!(session.sequence().len(), 10);
        assert_eq!(session.sequence().capacity(), 16);
        assert_eq!(session.sequence().get(0).unwrap(), 9);
    }

    #[test]
    fn test_output_failure() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut session = quiet_session();
        let e = session.run("size\n".as_bytes(), &mut Broken).unwrap_err();
        assert!(matches!(e.kind(), ErrorKind::Io { .. }));
    }
}
