//! Window functions for FIR filter design.
//!
//! A truncated sinc kernel rings badly (Gibbs phenomenon); multiplying it by
//! a taper window trades transition-band width for sidelobe rejection.

use std::f64::consts::PI;

/// Window function types for FIR design.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum WindowType {
    /// No windowing (rectangular window).
    Rectangular,

    /// Hann (raised cosine) window.
    Hann,

    /// Hamming window. The default for low-pass smoothing kernels.
    #[default]
    Hamming,

    /// Blackman window, for stronger sidelobe rejection.
    Blackman,
}

/// Generate window coefficients for a given window type and length.
///
/// The window is symmetric about its center sample.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length == 0 {
        return Vec::new();
    }
    if length == 1 {
        return vec![1.0];
    }

    let n = length as f64;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Rectangular => {
            window.resize(length, 1.0);
        }

        WindowType::Hann => {
            for i in 0..length {
                let x = i as f64 / (n - 1.0);
                window.push(0.5 * (1.0 - (2.0 * PI * x).cos()));
            }
        }

        WindowType::Hamming => {
            for i in 0..length {
                let x = i as f64 / (n - 1.0);
                window.push(0.54 - 0.46 * (2.0 * PI * x).cos());
            }
        }

        WindowType::Blackman => {
            for i in 0..length {
                let x = i as f64 / (n - 1.0);
                window.push(0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos());
            }
        }
    }

    window
}
