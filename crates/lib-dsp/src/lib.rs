//! # lib-dsp
//!
//! Numeric core for the antenna analyzer sweep toolkit.
//!
//! This crate provides the mathematical pieces of the measurement pipeline:
//!
//! - **VSWR Transform**: reflection-coefficient magnitude against a
//!   reference impedance
//! - **FIR Design**: windowed-sinc low-pass kernels with unity DC gain
//! - **Zero-phase Filtering**: forward + time-reversed-backward application,
//!   eliminating group delay
//! - **VSWR Smoothing**: the full smoothing policy, including passthrough of
//!   leading infinite samples

pub mod error;
pub mod window;
pub mod fir;
pub mod filtfilt;
pub mod vswr;
pub mod smooth;

pub use error::{DspError, DspResult};
pub use smooth::{smooth_vswr, DEFAULT_CUTOFF, DEFAULT_NUM_TAPS};
pub use vswr::{sweep_to_vswr, vswr};
