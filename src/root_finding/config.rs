//! Shared configuration for the iteration drivers.
//!
//! [`IterationCfg`] universal fields
//! - `precision` : convergence threshold on the per-iteration error
//! - `max_iter`  : iteration budget (optional; resolved per method)
//!
//! Validation happens in the drivers via [`IterationCfg::validate`].

use crate::real::Real;
use crate::root_finding::errors::DriverError;

pub const DEFAULT_PRECISION: Real = 0.01;

/// Driver configuration.
///
/// # Defaults
/// - `precision` defaults to [`DEFAULT_PRECISION`] (1%).
/// - `max_iter` is `None`, meaning "use the method's budget policy":
///   the analytic bound for bisection, the hard cap for everything else.
#[derive(Debug, Copy, Clone)]
pub struct IterationCfg {
    precision: Option<Real>,
    max_iter: Option<usize>,
}

impl IterationCfg {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, v: Real) -> Self {
        self.precision = Some(v);
        self
    }

    pub fn with_max_iter(mut self, v: usize) -> Self {
        self.max_iter = Some(v);
        self
    }

    #[inline]
    #[must_use]
    pub fn precision(&self) -> Real {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    #[inline]
    #[must_use]
    pub fn max_iter(&self) -> Option<usize> {
        self.max_iter
    }

    /// Checks the threshold and budget sanity.
    ///
    /// # Errors
    /// - [`DriverError::InvalidPrecision`] - `precision` <= 0 or non-finite
    /// - [`DriverError::InvalidMaxIter`]   - `max_iter` == 0
    pub fn validate(&self) -> Result<IterationCfg, DriverError> {
        let precision = self.precision();
        if !(precision.is_finite() && precision > 0.0) {
            return Err(DriverError::InvalidPrecision { got: precision });
        }

        match self.max_iter {
            Some(0) => Err(DriverError::InvalidMaxIter { got: 0 }),
            max_iter => Ok(Self {
                precision: Some(precision),
                max_iter,
            }),
        }
    }
}

impl Default for IterationCfg {
    fn default() -> Self {
        Self {
            precision: Some(DEFAULT_PRECISION),
            max_iter: None,
        }
    }
}
