//! VSWR sweep smoothing.
//!
//! Applies a zero-phase low-pass FIR filter to a VSWR sequence. The filter
//! cannot process non-finite samples, and total reflections (`+inf`) are
//! common at the low end of a wide sweep, so a contiguous run of infinite
//! values at the head of the sequence is passed through unfiltered and only
//! the finite tail is smoothed.

use crate::error::DspResult;
use crate::filtfilt::filtfilt;
use crate::fir::low_pass;
use crate::window::WindowType;
use lib_types::{VswrPoint, VswrSweep};

/// Default kernel length for sweep smoothing.
pub const DEFAULT_NUM_TAPS: usize = 64;

/// Default normalized cutoff (cycles/sample, Nyquist = 0.5).
pub const DEFAULT_CUTOFF: f64 = 0.06;

/// Smooth a VSWR sweep with a zero-phase low-pass FIR filter.
///
/// The output has the same length and the same frequency values as the
/// input. The kernel length is `num_taps`, reduced to a third of the usable
/// sample count (minus one) when the sweep is short, so the zero-phase edge
/// extension always fits.
///
/// Sweeps whose usable (finite-tail) sample count is below 6 cannot support
/// even a single-tap kernel under that rule and are returned unmodified.
///
/// Any `NaN` the filter produces (possible only if non-finite values occur
/// past the leading run) is mapped to `+inf` in the output.
pub fn smooth_vswr(points: &[VswrPoint], num_taps: usize, cutoff: f64) -> DspResult<VswrSweep> {
    let leading = points
        .iter()
        .take_while(|p| p.vswr == f64::INFINITY)
        .count();
    let usable = points.len() - leading;

    let Some(taps) = effective_taps(num_taps, usable) else {
        return Ok(points.to_vec());
    };

    let kernel = low_pass(taps, cutoff, WindowType::Hamming)?;
    let tail: Vec<f64> = points[leading..].iter().map(|p| p.vswr).collect();
    let filtered = filtfilt(&kernel, &tail)?;

    let mut out = points[..leading].to_vec();
    out.extend(
        points[leading..]
            .iter()
            .zip(&filtered)
            .map(|(p, &v)| VswrPoint {
                frequency: p.frequency,
                vswr: if v.is_nan() { f64::INFINITY } else { v },
            }),
    );
    Ok(out)
}

/// Kernel length usable on `usable` samples: `min(num_taps, usable/3 - 1)`.
///
/// The bound keeps the `3 * (taps - 1)` edge extension strictly shorter than
/// the signal. Returns `None` when not even one tap fits.
fn effective_taps(num_taps: usize, usable: usize) -> Option<usize> {
    let limit = (usable / 3).checked_sub(1)?;
    if limit == 0 {
        return None;
    }
    Some(num_taps.min(limit))
}
