//! # lib-analyzer
//!
//! Device access layer for the antenna analyzer sweep toolkit.
//!
//! This crate drives the analyzer's half-duplex, line-oriented serial
//! protocol and handles the flat CSV sweep formats:
//!
//! - **Line Transport**: newline-framed request/response over a serial port
//! - **Transaction Engine**: single-pass response iteration with OK/ERROR
//!   terminal handling
//! - **Sweep Acquisition**: the fixed VER/ON/FQ/SW/FRX/OFF command sequence
//! - **CSV Codecs**: impedance and VSWR sweep files
//!
//! The protocol is strictly single-outstanding-command: a transaction must
//! be fully consumed (or abandoned) before the next command is issued.

pub mod error;
pub mod transport;
pub mod transaction;
pub mod acquire;
pub mod csv;

#[cfg(test)]
pub(crate) mod testing;

pub use acquire::{acquire_sweep, AcquiredSweep};
pub use error::{CsvError, ProtocolError};
pub use transaction::{transact, transact_cmd, Transaction};
pub use transport::{LineTransport, SerialLink, DEFAULT_BAUD_RATE};
