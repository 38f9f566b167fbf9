//! Bracketing driver: bisection and false position over a shrinking interval.

use thiserror::Error;

use super::algorithms::{BracketMethod, ITERATION_BUDGET_CAP};
use super::config::IterationCfg;
use super::errors::DriverError;
use super::report::{IterationRecord, RunReport, Termination};
use crate::real::Real;

#[derive(Debug, Error)]
pub enum BracketError {
    #[error(transparent)]
    Common(#[from] DriverError),

    #[error("degenerate interval: lower == upper == {x}")]
    DegenerateInterval { x: Real },

    #[error("invalid bounds: lower and upper must be finite. got [{lower}, {upper}]")]
    InvalidBounds { lower: Real, upper: Real },

    #[error("secant denominator vanished: f(lower)={fa}, f(upper)={fb}")]
    DegenerateSecant { fa: Real, fb: Real },
}

/// Analytic iteration budget for bisection at a given precision.
///
/// `ceil(ln(|upper - lower| / precision))`, clamped to
/// `[1, ITERATION_BUDGET_CAP]`.
///
/// # Errors
/// - [`DriverError::InvalidPrecision`] - `precision` <= 0 or non-finite
pub fn bisection_budget(
    lower: Real,
    upper: Real,
    precision: Real,
) -> Result<usize, DriverError> {
    if !(precision.is_finite() && precision > 0.0) {
        return Err(DriverError::InvalidPrecision { got: precision });
    }

    let width = (upper - lower).abs();
    let analytic = (width / precision).ln().ceil();
    let analytic = if analytic.is_finite() && analytic > 0.0 {
        analytic as usize
    } else {
        0
    };

    Ok(analytic.clamp(1, ITERATION_BUDGET_CAP))
}

/// Candidate root from the current bracket.
///
/// - bisection: midpoint `(lower + upper) / 2`
/// - false position: x-intercept of the secant through
///   `(lower, f(lower))` and `(upper, f(upper))`
///
/// # Errors
/// - [`BracketError::DegenerateSecant`] - the secant denominator
///   `f(lower) - f(upper)` is too small to divide by
fn candidate<E>(
    method: BracketMethod,
    eval: &mut E,
    lower: Real,
    upper: Real,
) -> Result<Real, BracketError>
where
    E: FnMut(Real) -> Result<Real, BracketError>,
{
    match method {
        BracketMethod::Bisection => Ok((lower + upper) / 2.0),
        BracketMethod::FalsePosition => {
            let fa = eval(lower)?;
            let fb = eval(upper)?;
            let denom = fa - fb;
            let scale = fa.abs().max(fb.abs()).max(1.0);
            if denom.abs() <= crate::real::MACHINE_EPSILON * scale {
                return Err(BracketError::DegenerateSecant { fa, fb });
            }
            Ok(upper - fb * (lower - upper) / denom)
        }
    }
}

/// Runs a bracketing method over `[lower, upper]`.
///
/// The driver owns the convergence loop and threads all state explicitly;
/// the method only supplies the candidate step. The running estimate starts
/// at the sentinel magnitude `|upper - lower|` (not a true root estimate),
/// so the first recorded error compares the first candidate against it.
///
/// Each iteration: compute the candidate, take `error = |xr - candidate|`,
/// and stop *before* touching the bracket when `error < precision`; the
/// last value is retained but the bracket is not adjusted. Otherwise the
/// bracket shrinks toward the sign change of `f`, and a record is appended.
/// An exactly-zero `f(lower) * f(candidate)` collapses the bracket and
/// stops with [`Termination::ExactRoot`], distinct from precision
/// termination.
///
/// # Arguments
/// - `f`      : target function
/// - `method` : bracketing step strategy
/// - `lower`, `upper` : finite, distinct interval endpoints
/// - `cfg`    : precision threshold and optional budget; an unset budget is
///   resolved per method ([`bisection_budget`] for bisection, the hard cap
///   for false position)
///
/// # Returns
/// A [`RunReport`]; `iterations == trace.len()`, and the terminating
/// iteration's sub-threshold error is excluded from the trace.
///
/// # Errors
/// - [`BracketError::InvalidBounds`]      - non-finite endpoint
/// - [`BracketError::DegenerateInterval`] - `lower == upper`; fails fast,
///   no iterations run, no records produced
/// - [`BracketError::DegenerateSecant`]   - false-position denominator
///   vanished (`f(lower) == f(upper)`)
/// - via [`BracketError::Common`]: invalid configuration, or a non-finite
///   function evaluation
pub fn run_bracketing<F>(
    mut f: F,
    method: BracketMethod,
    mut lower: Real,
    mut upper: Real,
    cfg: IterationCfg,
) -> Result<RunReport, BracketError>
where
    F: FnMut(Real) -> Real,
{
    if !(lower.is_finite() && upper.is_finite()) {
        return Err(BracketError::InvalidBounds { lower, upper });
    }
    if lower == upper {
        return Err(BracketError::DegenerateInterval { x: lower });
    }

    let cfg = cfg.validate()?;
    let precision = cfg.precision();

    let budget = match cfg.max_iter() {
        Some(m) => m,
        None => match method.default_budget() {
            Some(b) => b,
            None => bisection_budget(lower, upper, precision)?,
        },
    };

    // finiteness-checking evaluation
    let mut eval = |x: Real| -> Result<Real, BracketError> {
        let fx = f(x);
        if !fx.is_finite() {
            Err(DriverError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    // sentinel magnitude, not a root estimate
    let mut xr = (upper - lower).abs();
    let initial = xr;

    let mut trace = Vec::with_capacity(budget);
    let mut termination = Termination::BudgetExhausted;

    for index in 0..budget {
        let new_xr = candidate(method, &mut eval, lower, upper)?;
        let error = (xr - new_xr).abs();
        xr = new_xr;

        if error < precision {
            termination = Termination::PrecisionReached;
            break;
        }

        let product = eval(lower)? * eval(xr)?;
        if product > 0.0 {
            lower = xr;
        } else if product < 0.0 {
            upper = xr;
        } else {
            // candidate is the root; bracket collapses onto it
            termination = Termination::ExactRoot;
            break;
        }

        trace.push(IterationRecord {
            index,
            value: xr,
            error,
        });
    }

    let iterations = trace.len();
    Ok(RunReport {
        method: method.name(),
        initial,
        root: xr,
        iterations,
        termination,
        advisories: 0,
        trace,
    })
}
