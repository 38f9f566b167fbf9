//! Defines the [`RunReport`] returned by both iteration drivers.

use crate::real::Real;

/// One completed iteration: storage order, root estimate, per-iteration error.
///
/// `index` is 0-based and equals the record's position in the trace;
/// insertion order is iteration order. Records are immutable once produced.
#[derive(Debug, Copy, Clone)]
pub struct IterationRecord {
    pub index: usize,
    pub value: Real,
    pub error: Real,
}

/// Reasons an iteration driver may stop.
///
/// - [`Termination::PrecisionReached`] : per-iteration error fell below the
///   configured threshold.
/// - [`Termination::ExactRoot`]        : bracketing only; `f(lower) * f(xr)`
///   was exactly zero, so the bracket collapsed onto the root.
/// - [`Termination::BudgetExhausted`]  : the budget ran out. Not an error;
///   the trace simply holds everything that was accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    PrecisionReached,
    ExactRoot,
    BudgetExhausted,
}

/// Final report returned by both iteration drivers.
///
/// - `method`      : method name (e.g. `"bisection"`)
/// - `initial`     : iteration-0 value; the sentinel magnitude
///   `|upper - lower|` for bracketing runs, the starting guess for open runs
/// - `root`        : last computed estimate. Retained even when the
///   terminating iteration's record is not (see `trace`).
/// - `iterations`  : iterations that completed a state update;
///   equals `trace.len()`
/// - `termination` : why the driver stopped
/// - `advisories`  : convergence-advisory hits (fixed-point only, else 0)
/// - `trace`       : the error series handed to the plotter. The
///   terminating iteration is excluded: its error fell below the threshold
///   (or hit the root exactly) and never enters the series.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub method: &'static str,
    pub initial: Real,
    pub root: Real,
    pub iterations: usize,
    pub termination: Termination,
    pub advisories: usize,
    pub trace: Vec<IterationRecord>,
}

impl RunReport {
    /// `(index, error)` points for a chart series.
    #[must_use]
    pub fn error_points(&self) -> Vec<(i32, Real)> {
        self.trace
            .iter()
            .map(|record| (record.index as i32, record.error))
            .collect()
    }
}
