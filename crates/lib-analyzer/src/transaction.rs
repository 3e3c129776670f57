//! The request/response transaction engine.
//!
//! Every exchange with the analyzer is one command line followed by zero or
//! more data lines and a terminal marker: a literal `OK` on success or a
//! literal `ERROR` if the command is unsupported. Empty lines are line
//! noise / keepalives and are skipped.
//!
//! A transaction is a single-pass iterator; it must be fully consumed (or
//! abandoned) before the next command is issued. There is no pipelining.

use crate::error::ProtocolError;
use crate::transport::LineTransport;

/// Successful terminal marker.
const ACK: &str = "OK";

/// Failure terminal marker.
const NAK: &str = "ERROR";

/// Send `command` and iterate over its response data lines.
///
/// Each item is a data line or the error that ended the transaction.
/// Iteration stops after the terminal marker (or an error); no retries are
/// attempted.
pub fn transact<'a, T: LineTransport>(
    link: &'a mut T,
    command: &str,
) -> Result<Transaction<'a, T>, ProtocolError> {
    tracing::trace!(command, "sending command");
    link.send_line(command)?;
    Ok(Transaction {
        link,
        command: command.to_string(),
        done: false,
    })
}

/// Run a command expected to carry zero data lines before its `OK`.
///
/// Any data lines are discarded; only failure is surfaced.
pub fn transact_cmd<T: LineTransport>(link: &mut T, command: &str) -> Result<(), ProtocolError> {
    for line in transact(link, command)? {
        let line = line?;
        tracing::debug!(command, %line, "discarding unexpected data line");
    }
    Ok(())
}

/// In-flight response stream for one command.
pub struct Transaction<'a, T: LineTransport> {
    link: &'a mut T,
    command: String,
    done: bool,
}

impl<T: LineTransport> Iterator for Transaction<'_, T> {
    type Item = Result<String, ProtocolError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let line = match self.link.recv_line() {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };

            match line.as_str() {
                ACK => {
                    self.done = true;
                    return None;
                }
                NAK => {
                    self.done = true;
                    return Some(Err(ProtocolError::UnsupportedCommand {
                        command: self.command.clone(),
                    }));
                }
                "" => continue,
                _ => return Some(Ok(line)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedLink;

    #[test]
    fn test_yields_data_lines_until_ok() {
        let mut link = ScriptedLink::new(&["3.0", "OK"]);

        let lines: Result<Vec<_>, _> = transact(&mut link, "VER").unwrap().collect();
        assert_eq!(lines.unwrap(), vec!["3.0".to_string()]);
        assert_eq!(link.sent, vec!["VER".to_string()]);
    }

    #[test]
    fn test_error_line_fails_transaction() {
        let mut link = ScriptedLink::new(&["ERROR"]);

        let mut txn = transact(&mut link, "BOGUS").unwrap();
        match txn.next() {
            Some(Err(ProtocolError::UnsupportedCommand { command })) => {
                assert_eq!(command, "BOGUS");
            }
            other => panic!("expected UnsupportedCommand, got {other:?}"),
        }
        assert!(txn.next().is_none());
    }

    #[test]
    fn test_empty_lines_skipped() {
        let mut link = ScriptedLink::new(&["", "OK"]);

        let lines: Vec<_> = transact(&mut link, "ON").unwrap().collect();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_noise_between_data_lines_skipped() {
        let mut link = ScriptedLink::new(&["1.0,50.0,0.0", "", "2.0,49.0,1.0", "OK"]);

        let lines: Result<Vec<_>, _> = transact(&mut link, "FRX1").unwrap().collect();
        assert_eq!(lines.unwrap().len(), 2);
    }

    #[test]
    fn test_transact_cmd_discards_data_lines() {
        let mut link = ScriptedLink::new(&["stray", "OK"]);
        transact_cmd(&mut link, "OFF").unwrap();
    }

    #[test]
    fn test_transact_cmd_surfaces_failure() {
        let mut link = ScriptedLink::new(&["ERROR"]);
        assert!(matches!(
            transact_cmd(&mut link, "OFF"),
            Err(ProtocolError::UnsupportedCommand { .. })
        ));
    }

    #[test]
    fn test_exhausted_script_is_timeout() {
        // Connection goes silent before the terminator
        let mut link = ScriptedLink::new(&["1.0,50.0,0.0"]);

        let mut txn = transact(&mut link, "FRX0").unwrap();
        assert!(matches!(txn.next(), Some(Ok(_))));
        assert!(matches!(txn.next(), Some(Err(ProtocolError::Timeout))));
        assert!(txn.next().is_none());
    }
}
