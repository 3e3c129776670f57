//! Zero-phase FIR filtering.
//!
//! A causal FIR filter delays its output by half the kernel length. Applying
//! the kernel forward and then again over the time-reversed result cancels
//! the group delay, so the output aligns sample-for-sample with the input.
//!
//! The signal is extended on both ends with an odd-symmetric reflection of
//! `3 * (taps - 1)` samples before filtering, which keeps filter startup
//! transients out of the returned region.

use crate::error::{DspError, DspResult};

/// Edge extension length used on each side of the signal.
#[inline]
pub fn pad_len(num_taps: usize) -> usize {
    3 * num_taps.saturating_sub(1)
}

/// Causal FIR filter with zero initial state.
///
/// `output[i] = sum_k taps[k] * signal[i - k]`, treating samples before the
/// start as zero.
pub fn lfilter(taps: &[f64], signal: &[f64]) -> Vec<f64> {
    let mut output = Vec::with_capacity(signal.len());
    for i in 0..signal.len() {
        let mut acc = 0.0;
        for (k, &b) in taps.iter().enumerate() {
            if k > i {
                break;
            }
            acc += b * signal[i - k];
        }
        output.push(acc);
    }
    output
}

/// Apply an FIR kernel forward and backward (zero phase distortion).
///
/// The output has the same length as the input. Fails with
/// [`DspError::InsufficientData`] if the signal is not longer than the edge
/// extension on one side.
pub fn filtfilt(taps: &[f64], signal: &[f64]) -> DspResult<Vec<f64>> {
    if taps.is_empty() {
        return Err(DspError::InvalidTapCount(0));
    }

    let n = signal.len();
    let pad = pad_len(taps.len());
    if n <= pad {
        return Err(DspError::InsufficientData {
            needed: pad + 1,
            got: n,
        });
    }

    // Odd-symmetric extension: reflect about the end samples so the
    // extension is continuous in value and slope.
    let first = signal[0];
    let last = signal[n - 1];
    let mut extended = Vec::with_capacity(n + 2 * pad);
    for i in (1..=pad).rev() {
        extended.push(2.0 * first - signal[i]);
    }
    extended.extend_from_slice(signal);
    for i in 1..=pad {
        extended.push(2.0 * last - signal[n - 1 - i]);
    }

    let mut forward = lfilter(taps, &extended);
    forward.reverse();
    let mut backward = lfilter(taps, &forward);
    backward.reverse();

    Ok(backward[pad..pad + n].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fir::low_pass;
    use crate::window::WindowType;

    #[test]
    fn test_preserves_length() {
        let taps = low_pass(8, 0.1, WindowType::Hamming).unwrap();
        let signal: Vec<f64> = (0..100).map(|i| (i as f64 * 0.3).sin()).collect();

        let filtered = filtfilt(&taps, &signal).unwrap();
        assert_eq!(filtered.len(), signal.len());
    }

    #[test]
    fn test_constant_input_unchanged() {
        // Unity DC gain applied twice is still unity
        let taps = low_pass(16, 0.06, WindowType::Hamming).unwrap();
        let signal = vec![2.5; 200];

        let filtered = filtfilt(&taps, &signal).unwrap();
        for &v in &filtered {
            assert!((v - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_phase_alignment() {
        // A symmetric bump must stay centered after zero-phase filtering
        let n = 101;
        let signal: Vec<f64> = (0..n)
            .map(|i| {
                let d = i as f64 - 50.0;
                (-d * d / 50.0).exp()
            })
            .collect();

        let taps = low_pass(9, 0.1, WindowType::Hamming).unwrap();
        let filtered = filtfilt(&taps, &signal).unwrap();

        let peak = filtered
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 50);
    }

    #[test]
    fn test_single_tap_is_identity() {
        let signal = vec![1.0, -3.0, 2.0, 7.5];
        let filtered = filtfilt(&[1.0], &signal).unwrap();
        assert_eq!(filtered, signal);
    }

    #[test]
    fn test_short_signal_rejected() {
        let taps = low_pass(8, 0.1, WindowType::Hamming).unwrap();
        // pad is 21 per side; a 21-sample signal is too short
        let signal = vec![1.0; 21];

        assert!(matches!(
            filtfilt(&taps, &signal),
            Err(DspError::InsufficientData { needed: 22, got: 21 })
        ));
    }

    #[test]
    fn test_lfilter_delays_impulse() {
        let taps = vec![0.25, 0.5, 0.25];
        let mut signal = vec![0.0; 8];
        signal[3] = 1.0;

        let out = lfilter(&taps, &signal);
        assert!((out[3] - 0.25).abs() < 1e-12);
        assert!((out[4] - 0.5).abs() < 1e-12);
        assert!((out[5] - 0.25).abs() < 1e-12);
    }
}
