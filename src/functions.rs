//! Hard-coded target functions for the study tools.
//!
//! The root-finding tools search the cubic `3x^3 + x - 3`; the
//! finite-difference tool differentiates the quartic
//! `0.1x^4 - 0.15x^3 - 0.5x^2 - 0.25x + 1.2`. Tests exercise these exact
//! functions, so they live in the library rather than the binaries.

use crate::real::Real;

/// `f(x) = 3x^3 + x - 3`
pub fn cubic(x: Real) -> Real {
    3.0 * x * x * x + x - 3.0
}

/// `f'(x) = 9x^2 + 1`
pub fn cubic_deriv(x: Real) -> Real {
    9.0 * x * x + 1.0
}

/// Fixed-point form of [`cubic`]: `g(x) = ((3 - x) / 3)^(1/3)`.
///
/// Deliberately `powf`, not `cbrt`: a negative base yields NaN, which the
/// open driver surfaces as a non-finite evaluation.
pub fn cubic_fixed_point(x: Real) -> Real {
    ((3.0 - x) / 3.0).powf(1.0 / 3.0)
}

/// `g'(x) = -(1/9) ((3 - x) / 3)^(-2/3)`
pub fn cubic_fixed_point_deriv(x: Real) -> Real {
    -((3.0 - x) / 3.0).powf(-2.0 / 3.0) / 9.0
}

/// `f(x) = 0.1x^4 - 0.15x^3 - 0.5x^2 - 0.25x + 1.2`
pub fn quartic(x: Real) -> Real {
    0.1 * x * x * x * x - 0.15 * x * x * x - 0.5 * x * x - 0.25 * x + 1.2
}

/// `f'(x) = 0.4x^3 - 0.45x^2 - x - 0.25`
pub fn quartic_deriv(x: Real) -> Real {
    0.4 * x * x * x - 0.45 * x * x - x - 0.25
}

/// `f'''(x) = 2.4x - 0.9`
pub fn quartic_third(x: Real) -> Real {
    2.4 * x - 0.9
}
