//! Finite-difference error analyzer.
//!
//! Sweeps a geometric range of step sizes `h = 10^i` and compares the
//! forward, backward and centered difference quotients against the analytic
//! derivative. The centered error traces the classic U-shape: it shrinks
//! with `h` while truncation dominates, then grows again once round-off
//! takes over.

use crate::real::{Real, MACHINE_EPSILON, REAL_MAX};

/// First exponent of the sweep (inclusive).
pub const SWEEP_START: i32 = -14;
/// One past the last exponent of the sweep.
pub const SWEEP_END: i32 = 1;

/// Errors of the three difference quotients at one step size `10^exponent`.
#[derive(Debug, Copy, Clone)]
pub struct SweepSample {
    pub exponent: i32,
    pub forward: Real,
    pub backward: Real,
    pub centered: Real,
}

/// Result of one sweep at an evaluation point.
///
/// - `x`             : evaluation point
/// - `optimal_step`  : theoretically optimal `h` from machine epsilon and
///   the third derivative
/// - `best_exponent` : sweep exponent minimizing the centered error
/// - `samples`       : one [`SweepSample`] per exponent, in sweep order
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub x: Real,
    pub optimal_step: Real,
    pub best_exponent: i32,
    pub samples: Vec<SweepSample>,
}

impl SweepReport {
    #[must_use]
    pub fn forward_points(&self) -> Vec<(i32, Real)> {
        self.samples.iter().map(|s| (s.exponent, s.forward)).collect()
    }

    #[must_use]
    pub fn backward_points(&self) -> Vec<(i32, Real)> {
        self.samples.iter().map(|s| (s.exponent, s.backward)).collect()
    }

    #[must_use]
    pub fn centered_points(&self) -> Vec<(i32, Real)> {
        self.samples.iter().map(|s| (s.exponent, s.centered)).collect()
    }
}

/// Theoretically optimal centered-difference step at `x`:
/// `(3 * eps * x / M)^(1/3)` with `M = f'''(x + 10^SWEEP_END)`.
///
/// `M` is a cheap proxy for `max|f'''|` near `x`, not a true maximum
/// search; the proxy is intentional and carried as-is.
pub fn optimal_step_size<T>(mut third: T, x: Real) -> Real
where
    T: FnMut(Real) -> Real,
{
    let base: Real = 10.0;
    let epsilon = x * MACHINE_EPSILON;
    let m = third(x + base.powi(SWEEP_END));
    let one_by_three: Real = 1.0 / 3.0;
    (3.0 * epsilon / m).powf(one_by_three)
}

/// Sweeps step sizes `10^i` for `i` in `[SWEEP_START, SWEEP_END)` and
/// measures the error of each difference quotient against `deriv(x)`.
///
/// - forward  : `(f(x+h) - f(x)) / h`
/// - backward : `(f(x) - f(x-h)) / h`
/// - centered : `(f(x+h) - f(x-h)) / (2h)`
///
/// The best exponent is found by a linear scan in increasing `i` with a
/// strict-minimum update, so the first minimum encountered (the smallest
/// `h` not yet dominated by round-off) wins ties.
pub fn analyze<F, D, T>(mut f: F, mut deriv: D, third: T, x: Real) -> SweepReport
where
    F: FnMut(Real) -> Real,
    D: FnMut(Real) -> Real,
    T: FnMut(Real) -> Real,
{
    let base: Real = 10.0;
    let actual = deriv(x);

    let mut samples = Vec::with_capacity((SWEEP_END - SWEEP_START) as usize);
    let mut best = REAL_MAX;
    let mut best_exponent = SWEEP_START;

    for exponent in SWEEP_START..SWEEP_END {
        let h = base.powi(exponent);
        let ahead = f(x + h);
        let behind = f(x - h);
        let at = f(x);

        let forward = (actual - (ahead - at) / h).abs();
        let backward = (actual - (at - behind) / h).abs();
        let centered = (actual - (ahead - behind) / (2.0 * h)).abs();

        if centered < best {
            best = centered;
            best_exponent = exponent;
        }

        samples.push(SweepSample {
            exponent,
            forward,
            backward,
            centered,
        });
    }

    SweepReport {
        x,
        optimal_step: optimal_step_size(third, x),
        best_exponent,
        samples,
    }
}
