//! Sweep point representations.
//!
//! A sweep is an ordered sequence of points taken across a frequency range;
//! the insertion order is the frequency axis. Points come in two flavors:
//! raw impedance measurements as read from the analyzer, and scalar VSWR
//! values derived from them.

use crate::units::{Hertz, Ohms};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// A single impedance measurement from the analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpedancePoint {
    /// Measurement frequency.
    pub frequency: Hertz,

    /// Series resistance (real part).
    pub resistance: Ohms,

    /// Series reactance (imaginary part; negative for capacitive loads).
    pub reactance: Ohms,
}

impl ImpedancePoint {
    /// The complex impedance R + jX.
    #[inline]
    pub fn impedance(&self) -> Complex64 {
        Complex64::new(self.resistance.0, self.reactance.0)
    }
}

/// A single VSWR value.
///
/// `vswr` lies in `[1, +inf]`; `f64::INFINITY` denotes an exact short or
/// open against the reference impedance. No sentinel values are used.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VswrPoint {
    /// Measurement frequency.
    pub frequency: Hertz,

    /// Voltage standing wave ratio.
    pub vswr: f64,
}

/// An ordered impedance sweep.
pub type ImpedanceSweep = Vec<ImpedancePoint>;

/// An ordered VSWR sweep.
pub type VswrSweep = Vec<VswrPoint>;
