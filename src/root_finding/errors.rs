//! Shared driver error type.
//!
//! ┌ non-finite function evaluation
//! ├ invalid precision threshold
//! └ invalid iteration budget
//!
//! The per-driver enums in `bracket` and `open` wrap this via
//! `#[error(transparent)]`.

use thiserror::Error;

use crate::real::Real;

/// Runtime errors common to both iteration drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: Real, fx: Real },

    #[error("invalid precision threshold: must be finite and > 0. got {got}")]
    InvalidPrecision { got: Real },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
