//! Numeric width selection.
//!
//! Exactly two floating-point widths are supported, chosen once per build
//! via the `single` feature. Every computation in the crate goes through
//! [`Real`]; nothing branches on the width at runtime.

#[cfg(feature = "single")]
pub type Real = f32;
#[cfg(not(feature = "single"))]
pub type Real = f64;

/// Machine epsilon for the selected width.
pub const MACHINE_EPSILON: Real = Real::EPSILON;

/// Largest finite value for the selected width.
pub const REAL_MAX: Real = Real::MAX;

#[cfg(feature = "single")]
pub const PRECISION_NAME: &str = "single";
#[cfg(not(feature = "single"))]
pub const PRECISION_NAME: &str = "double";
