//! Windowed-sinc FIR filter design.

use crate::error::{DspError, DspResult};
use crate::window::{generate_window, WindowType};
use std::f64::consts::PI;

/// Design a linear-phase low-pass FIR kernel.
///
/// `cutoff` is the normalized cutoff frequency in cycles per sample
/// (Nyquist = 0.5). The kernel is a sinc truncated to `num_taps` samples,
/// multiplied by the given window and normalized to unity gain at DC, so a
/// constant input passes through unchanged.
pub fn low_pass(num_taps: usize, cutoff: f64, window_type: WindowType) -> DspResult<Vec<f64>> {
    if num_taps == 0 {
        return Err(DspError::InvalidTapCount(num_taps));
    }
    if !(cutoff > 0.0 && cutoff < 0.5) {
        return Err(DspError::InvalidCutoff(cutoff));
    }

    let center = (num_taps - 1) as f64 / 2.0;
    let window = generate_window(window_type, num_taps);

    let mut taps = Vec::with_capacity(num_taps);
    for (i, &w) in window.iter().enumerate() {
        let n = i as f64 - center;
        let sinc = if n == 0.0 {
            2.0 * cutoff
        } else {
            (2.0 * PI * cutoff * n).sin() / (PI * n)
        };
        taps.push(sinc * w);
    }

    // Normalize to unity DC gain
    let gain: f64 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= gain;
    }

    Ok(taps)
}
