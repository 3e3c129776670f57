//! Newline-framed line transport over a serial connection.
//!
//! The analyzer speaks a textual protocol: one command line out, zero or
//! more response lines back. This module owns the byte-level framing;
//! response interpretation lives in [`crate::transaction`].

use crate::error::ProtocolError;
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

/// Analyzer default baud rate.
pub const DEFAULT_BAUD_RATE: u32 = 38_400;

/// Read timeout applied to the serial port. A sweep point arrives well
/// within this on every supported firmware.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// One line out, one line in.
///
/// Implementations deliver lines with the terminator and surrounding
/// whitespace stripped. A read timeout surfaces as
/// [`ProtocolError::Timeout`] rather than blocking forever.
pub trait LineTransport {
    /// Send one command line (terminator appended by the transport).
    fn send_line(&mut self, line: &str) -> Result<(), ProtocolError>;

    /// Receive one trimmed response line.
    fn recv_line(&mut self) -> Result<String, ProtocolError>;
}

/// [`LineTransport`] over any blocking byte stream.
pub struct SerialLink<T> {
    stream: T,
}

impl SerialLink<Box<dyn serialport::SerialPort>> {
    /// Open a serial port to the analyzer.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self, ProtocolError> {
        let port = serialport::new(path, baud_rate)
            .timeout(READ_TIMEOUT)
            .open()?;

        tracing::debug!(path, baud_rate, "serial port opened");
        Ok(Self { stream: port })
    }
}

impl<T> SerialLink<T> {
    /// Wrap an already-open byte stream.
    pub fn new(stream: T) -> Self {
        Self { stream }
    }
}

impl<T: Read + Write> LineTransport for SerialLink<T> {
    fn send_line(&mut self, line: &str) -> Result<(), ProtocolError> {
        self.stream.write_all(line.as_bytes())?;
        self.stream.write_all(b"\n")?;
        self.stream.flush()?;
        Ok(())
    }

    fn recv_line(&mut self) -> Result<String, ProtocolError> {
        let mut buf = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.stream.read(&mut byte) {
                // EOF mid-response fails the transaction; the protocol
                // guarantees a terminator line.
                Ok(0) => {
                    return Err(ProtocolError::Transport(std::io::Error::new(
                        ErrorKind::UnexpectedEof,
                        "connection closed mid-response",
                    )))
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    buf.push(byte[0]);
                }
                Err(e) if e.kind() == ErrorKind::TimedOut => return Err(ProtocolError::Timeout),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }
}
