//! # lib-types
//!
//! Core type definitions for the antenna analyzer sweep toolkit.
//!
//! This crate provides foundational types used throughout the workspace:
//! - Physical units with compile-time safety
//! - Sweep point representations for impedance and VSWR measurements

pub mod units;
pub mod sweep;

pub use units::*;
pub use sweep::*;

/// Re-export num_complex for convenience
pub use num_complex::Complex64;
