//! Open-method driver: fixed-point iteration and Newton-Raphson from a
//! single starting guess.

use log::warn;
use thiserror::Error;

use super::algorithms::OpenMethod;
use super::config::IterationCfg;
use super::errors::DriverError;
use super::report::{IterationRecord, RunReport, Termination};
use crate::real::Real;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Common(#[from] DriverError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: Real },

    #[error("next iterate is zero after x={x}; relative error undefined")]
    ZeroIterate { x: Real },

    #[error("derivative vanished at x={x}, f'(x)={dfx}; step undefined")]
    VanishingDerivative { x: Real, dfx: Real },
}

/// Step strategy capability for the open driver.
///
/// A pure mapping from the current iterate to the next candidate. No state
/// is shared between invocations; the driver threads everything explicitly.
pub trait OpenStep {
    /// Which member of the closed method set this is.
    fn method(&self) -> OpenMethod;

    /// Next candidate from the current iterate.
    fn next(&mut self, x: Real) -> Result<Real, OpenError>;

    /// Convergence advisory at the current iterate. Default: never.
    fn advisory(&mut self, _x: Real) -> bool {
        false
    }
}

/// Fixed-point iteration `x -> g(x)`.
///
/// The advisory fires when `|g'(x)| >= 1` at the current iterate, the
/// classical fixed-point convergence criterion. It is advisory only: the
/// driver logs it and keeps iterating.
pub struct FixedPoint<G, DG> {
    g: G,
    dg: DG,
}

impl<G, DG> FixedPoint<G, DG>
where
    G: FnMut(Real) -> Real,
    DG: FnMut(Real) -> Real,
{
    pub fn new(g: G, dg: DG) -> Self {
        Self { g, dg }
    }
}

impl<G, DG> OpenStep for FixedPoint<G, DG>
where
    G: FnMut(Real) -> Real,
    DG: FnMut(Real) -> Real,
{
    fn method(&self) -> OpenMethod {
        OpenMethod::FixedPoint
    }

    fn next(&mut self, x: Real) -> Result<Real, OpenError> {
        let gx = (self.g)(x);
        if !gx.is_finite() {
            return Err(DriverError::NonFiniteEvaluation { x, fx: gx }.into());
        }
        Ok(gx)
    }

    fn advisory(&mut self, x: Real) -> bool {
        (self.dg)(x).abs() >= 1.0
    }
}

/// Newton-Raphson `x -> x - f(x) / f'(x)`.
pub struct NewtonRaphson<F, DF> {
    f: F,
    df: DF,
}

impl<F, DF> NewtonRaphson<F, DF>
where
    F: FnMut(Real) -> Real,
    DF: FnMut(Real) -> Real,
{
    pub fn new(f: F, df: DF) -> Self {
        Self { f, df }
    }
}

impl<F, DF> OpenStep for NewtonRaphson<F, DF>
where
    F: FnMut(Real) -> Real,
    DF: FnMut(Real) -> Real,
{
    fn method(&self) -> OpenMethod {
        OpenMethod::NewtonRaphson
    }

    fn next(&mut self, x: Real) -> Result<Real, OpenError> {
        let fx = (self.f)(x);
        if !fx.is_finite() {
            return Err(DriverError::NonFiniteEvaluation { x, fx }.into());
        }
        let dfx = (self.df)(x);
        if !dfx.is_finite() {
            return Err(DriverError::NonFiniteEvaluation { x, fx: dfx }.into());
        }
        if dfx == 0.0 {
            return Err(OpenError::VanishingDerivative { x, dfx });
        }
        Ok(x - fx / dfx)
    }
}

/// Runs an open method from the starting guess `x0`.
///
/// Same loop shape as the bracketing driver, but the error is *relative*:
/// `|x - new_x| / new_x`, dividing by the new iterate. A zero new iterate
/// would make that undefined and is rejected as [`OpenError::ZeroIterate`]
/// rather than propagated as infinity. Note the denominator keeps its sign:
/// a negative iterate yields a negative error, which terminates the loop
/// immediately.
///
/// The advisory capability of the step is consulted at the current iterate
/// before each step; hits are logged via `warn!` and counted in the report,
/// but never stop the iteration. Divergence is only observable as an error
/// series that fails to shrink.
///
/// # Arguments
/// - `step` : one of the [`OpenStep`] strategies
/// - `x0`   : finite starting guess
/// - `cfg`  : precision threshold and optional budget (default: the
///   method's budget, 100)
///
/// # Returns
/// A [`RunReport`]; as with bracketing, the terminating iteration's
/// sub-threshold error is excluded from the trace and `root` keeps the last
/// computed value.
///
/// # Errors
/// - [`OpenError::InvalidGuess`]         - `x0` non-finite
/// - [`OpenError::ZeroIterate`]          - next iterate exactly zero
/// - [`OpenError::VanishingDerivative`]  - Newton step with `f'(x) == 0`
/// - via [`OpenError::Common`]: invalid configuration, or a non-finite
///   evaluation
pub fn run_open<S>(
    mut step: S,
    x0: Real,
    cfg: IterationCfg,
) -> Result<RunReport, OpenError>
where
    S: OpenStep,
{
    if !x0.is_finite() {
        return Err(OpenError::InvalidGuess { x0 });
    }

    let cfg = cfg.validate()?;
    let precision = cfg.precision();
    let method = step.method();
    let budget = cfg.max_iter().unwrap_or_else(|| method.default_budget());

    let mut x = x0;
    let mut advisories = 0usize;
    let mut trace = Vec::with_capacity(budget);
    let mut termination = Termination::BudgetExhausted;

    for index in 0..budget {
        if step.advisory(x) {
            warn!("{method}: may not converge from x={x:e} (derivative magnitude >= 1)");
            advisories += 1;
        }

        let new_x = step.next(x)?;
        if new_x == 0.0 {
            return Err(OpenError::ZeroIterate { x });
        }

        let error = (x - new_x).abs() / new_x;
        x = new_x;

        if error < precision {
            termination = Termination::PrecisionReached;
            break;
        }

        trace.push(IterationRecord {
            index,
            value: x,
            error,
        });
    }

    let iterations = trace.len();
    Ok(RunReport {
        method: method.name(),
        initial: x0,
        root: x,
        iterations,
        termination,
        advisories,
        trace,
    })
}
