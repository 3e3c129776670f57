//! Error types for DSP operations.

use thiserror::Error;

/// Errors that can occur during DSP operations.
#[derive(Debug, Error)]
pub enum DspError {
    /// FIR kernel needs at least one tap.
    #[error("invalid tap count: {0}")]
    InvalidTapCount(usize),

    /// Normalized cutoff outside the open interval (0, 0.5).
    #[error("normalized cutoff must lie in (0, 0.5), got {0}")]
    InvalidCutoff(f64),

    /// Insufficient data for operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

/// Result type for DSP operations.
pub type DspResult<T> = Result<T, DspError>;
