//! Study tools for classical numerical methods on fixed scalar functions.
//!
//! Two iteration drivers share one shape: [`root_finding::bracket`] runs the
//! bracketing methods (bisection, false position) over a shrinking interval,
//! [`root_finding::open`] runs the open methods (fixed-point, Newton-Raphson)
//! from a single starting guess. Both thread all state explicitly and hand
//! back a [`root_finding::report::RunReport`] with the per-iteration error
//! series. [`diff`] sweeps finite-difference step sizes to separate
//! truncation from round-off error. [`plot`] streams the collected series to
//! an external gnuplot process.

pub mod diff;
pub mod functions;
pub mod logging;
pub mod plot;
pub mod real;
pub mod root_finding;
pub mod table;
