//! Impedance to VSWR conversion.

use lib_types::{Complex64, ImpedancePoint, Ohms, VswrPoint, VswrSweep};

/// Magnitude of the reflection coefficient of `z` against reference `z0`.
///
/// `|gamma| = |z - z0| / |z + z0|`
pub fn reflection_magnitude(z: Complex64, z0: Ohms) -> f64 {
    let z0 = Complex64::new(z0.0, 0.0);
    (z - z0).norm() / (z + z0).norm()
}

/// Voltage standing wave ratio of `z` against reference `z0`.
///
/// Returns `f64::INFINITY` for total reflection (`|gamma| = 1`, an exact
/// short or open). A reflection magnitude above 1 can only come from
/// measurement noise on a near-total reflection and is reported as infinite
/// as well, keeping the result in `[1, +inf]`.
pub fn vswr(z: Complex64, z0: Ohms) -> f64 {
    let gamma = reflection_magnitude(z, z0);
    if gamma >= 1.0 {
        f64::INFINITY
    } else {
        (1.0 + gamma) / (1.0 - gamma)
    }
}

/// Convert one impedance measurement to a VSWR point.
pub fn vswr_point(point: &ImpedancePoint, z0: Ohms) -> VswrPoint {
    VswrPoint {
        frequency: point.frequency,
        vswr: vswr(point.impedance(), z0),
    }
}

/// Convert a whole impedance sweep, preserving order and frequencies.
pub fn sweep_to_vswr(points: &[ImpedancePoint], z0: Ohms) -> VswrSweep {
    points.iter().map(|p| vswr_point(p, z0)).collect()
}
