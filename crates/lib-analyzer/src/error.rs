//! Error types for device and file operations.

use lib_types::Hertz;
use thiserror::Error;

/// Errors raised while talking to the analyzer.
///
/// None of these are recovered internally; a failed step fails the whole
/// sweep.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Device answered a command with an `ERROR` line.
    #[error("device rejected command {command:?}: unsupported command")]
    UnsupportedCommand { command: String },

    /// A command that must produce a data line terminated without one.
    #[error("no data line in response to {command:?}")]
    MissingLine { command: String },

    /// Fewer data lines than the requested point count.
    #[error("sweep truncated: got {got} of {expected} points")]
    Truncated { expected: usize, got: usize },

    /// More data lines than the requested point count.
    #[error("sweep returned more data lines than the {expected} requested points")]
    Overrun { expected: usize },

    /// A sweep data line that does not parse as `MHz,R,X`.
    #[error("bad sweep data line {line:?}: {message}")]
    BadDataLine { line: String, message: String },

    /// Read timed out waiting for a response line.
    #[error("timed out waiting for a response line")]
    Timeout,

    /// Underlying connection failed to read or write.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// Serial port could not be opened.
    #[error("failed to open serial port: {0}")]
    Open(#[from] serialport::Error),

    /// Stop frequency below start frequency. Checked before any device I/O.
    #[error("stop frequency {} Hz below start frequency {} Hz", stop.0, start.0)]
    InvalidRange { start: Hertz, stop: Hertz },

    /// A sweep must request at least one point.
    #[error("sweep must request at least one point")]
    EmptySweep,
}

/// Errors raised while reading or writing sweep CSV files.
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O failure on the underlying file or stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line that does not match the expected CSV shape.
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}
