//! Method definitions for the two driver families.
//!
//! Provides the [`BracketMethod`] and [`OpenMethod`] enums, which enumerate
//! the supported step strategies, along with the shared
//! [`ITERATION_BUDGET_CAP`] hard cap.

/// Hard cap on iteration budgets.
///
/// Applied to the analytic bisection bound, and used directly as the budget
/// for methods that rely on early termination instead of a theoretical
/// iteration count.
pub const ITERATION_BUDGET_CAP: usize = 100;

/// Bracketing step strategies: interval -> candidate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketMethod {
    Bisection,
    FalsePosition,
}

impl BracketMethod {
    /// Fallback budget when none is configured.
    ///
    /// # Notes
    /// - [`BracketMethod::Bisection`] returns `None`, meaning "compute the
    ///   analytic bound instead" (see [`crate::root_finding::bracket::bisection_budget`]).
    /// - [`BracketMethod::FalsePosition`] has no useful a-priori bound and
    ///   gets the full cap, relying on early termination.
    pub const fn default_budget(self) -> Option<usize> {
        match self {
            BracketMethod::Bisection => None,
            BracketMethod::FalsePosition => Some(ITERATION_BUDGET_CAP),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BracketMethod::Bisection => "bisection",
            BracketMethod::FalsePosition => "false-position",
        }
    }
}

impl std::fmt::Display for BracketMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Open step strategies: current value -> next value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenMethod {
    FixedPoint,
    NewtonRaphson,
}

impl OpenMethod {
    /// Fallback budget when none is configured.
    pub const fn default_budget(self) -> usize {
        ITERATION_BUDGET_CAP
    }

    pub const fn name(self) -> &'static str {
        match self {
            OpenMethod::FixedPoint => "fixed-point",
            OpenMethod::NewtonRaphson => "newton-raphson",
        }
    }
}

impl std::fmt::Display for OpenMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
