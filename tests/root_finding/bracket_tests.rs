//! tests for the bracketing driver (bisection and false position)
use rootsweep::functions::cubic;
use rootsweep::root_finding::algorithms::BracketMethod;
use rootsweep::root_finding::bracket::{bisection_budget, run_bracketing, BracketError};
use rootsweep::root_finding::config::IterationCfg;
use rootsweep::root_finding::errors::DriverError;
use rootsweep::root_finding::report::Termination;

type TestResult = Result<(), BracketError>;

#[test]
fn analytic_budget_unit_interval() -> TestResult {
    // ceil(ln(1 / 0.01)) = ceil(4.60..) = 5
    assert_eq!(bisection_budget(0.0, 1.0, 0.01)?, 5);
    Ok(())
}

#[test]
fn analytic_budget_clamps() -> TestResult {
    // width == precision gives ln(1) = 0, clamped up to 1
    assert_eq!(bisection_budget(0.0, 1.0, 1.0)?, 1);
    // absurd demands are clamped down to the hard cap
    assert_eq!(bisection_budget(0.0, 1e60, 1e-60)?, 100);
    Ok(())
}

#[test]
fn analytic_budget_rejects_bad_precision() -> TestResult {
    let err = bisection_budget(0.0, 1.0, 0.0).unwrap_err();
    assert!(matches!(err, DriverError::InvalidPrecision { .. }));

    let err = bisection_budget(0.0, 1.0, f64::NAN).unwrap_err();
    assert!(matches!(err, DriverError::InvalidPrecision { .. }));
    Ok(())
}

#[test]
fn bisection_finds_cubic_root() -> TestResult {
    let cfg = IterationCfg::new().with_precision(1e-6).with_max_iter(60);
    let res = run_bracketing(cubic, BracketMethod::Bisection, 0.0, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::PrecisionReached);
    assert!((res.root - 0.8893959).abs() < 1e-5);
    assert_eq!(res.iterations, res.trace.len());
    Ok(())
}

#[test]
fn bisection_default_budget_exhausts_on_unit_interval() -> TestResult {
    // the analytic bound (5) runs out before the 1% threshold is met
    let res = run_bracketing(cubic, BracketMethod::Bisection, 0.0, 1.0, IterationCfg::new())?;

    assert_eq!(res.termination, Termination::BudgetExhausted);
    assert_eq!(res.iterations, 5);
    assert!((res.root - 0.90625).abs() < 1e-12);
    Ok(())
}

#[test]
fn bisection_error_halves_each_iteration() -> TestResult {
    let f = |x: f64| x - 0.3;
    let cfg = IterationCfg::new().with_precision(1e-4).with_max_iter(60);
    let res = run_bracketing(f, BracketMethod::Bisection, 0.0, 1.0, cfg)?;

    assert_eq!(res.trace[0].error, 0.5);
    for pair in res.trace.windows(2) {
        assert!((pair[1].error - pair[0].error / 2.0).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn false_position_finds_cubic_root() -> TestResult {
    let cfg = IterationCfg::new().with_precision(1e-6);
    let res = run_bracketing(cubic, BracketMethod::FalsePosition, 0.0, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::PrecisionReached);
    assert!((res.root - 0.8893959).abs() < 1e-4);
    // well under the fixed budget of 100
    assert!(res.iterations < 30);
    Ok(())
}

#[test]
fn false_position_flat_secant() -> TestResult {
    // f(-1) == f(1), so the secant through the endpoints is horizontal
    let f = |x: f64| x * x;
    let err =
        run_bracketing(f, BracketMethod::FalsePosition, -1.0, 1.0, IterationCfg::new())
            .unwrap_err();

    assert!(matches!(err, BracketError::DegenerateSecant { .. }));
    Ok(())
}

#[test]
fn exact_root_collapses_bracket() -> TestResult {
    // first midpoint of [-1, 1] is the root itself
    let f = |x: f64| x;
    let res = run_bracketing(f, BracketMethod::Bisection, -1.0, 1.0, IterationCfg::new())?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert!(res.trace.is_empty());
    Ok(())
}

#[test]
fn degenerate_interval_fails_fast() -> TestResult {
    let err =
        run_bracketing(cubic, BracketMethod::Bisection, 1.0, 1.0, IterationCfg::new())
            .unwrap_err();

    assert!(matches!(err, BracketError::DegenerateInterval { x } if x == 1.0));
    Ok(())
}

#[test]
fn non_finite_bounds_rejected() -> TestResult {
    let err = run_bracketing(
        cubic,
        BracketMethod::Bisection,
        f64::NAN,
        1.0,
        IterationCfg::new(),
    )
    .unwrap_err();

    assert!(matches!(err, BracketError::InvalidBounds { .. }));
    Ok(())
}

#[test]
fn explicit_budget_exhausts() -> TestResult {
    let f = |x: f64| x - 0.3;
    let cfg = IterationCfg::new().with_precision(1e-12).with_max_iter(10);
    let res = run_bracketing(f, BracketMethod::Bisection, 0.0, 1.0, cfg)?;

    assert_eq!(res.termination, Termination::BudgetExhausted);
    assert_eq!(res.iterations, 10);
    Ok(())
}

#[test]
fn non_finite_evaluation_surfaces() -> TestResult {
    // pole at the first midpoint
    let f = |x: f64| 1.0 / x;
    let err =
        run_bracketing(f, BracketMethod::Bisection, -1.0, 1.0, IterationCfg::new())
            .unwrap_err();

    assert!(matches!(
        err,
        BracketError::Common(DriverError::NonFiniteEvaluation { .. })
    ));
    Ok(())
}

#[test]
fn cfg_validation_errors() -> TestResult {
    let cfg = IterationCfg::new().with_precision(0.0);
    let err = run_bracketing(cubic, BracketMethod::Bisection, 0.0, 1.0, cfg).unwrap_err();
    assert!(matches!(
        err,
        BracketError::Common(DriverError::InvalidPrecision { .. })
    ));

    let cfg = IterationCfg::new().with_max_iter(0);
    let err = run_bracketing(cubic, BracketMethod::Bisection, 0.0, 1.0, cfg).unwrap_err();
    assert!(matches!(
        err,
        BracketError::Common(DriverError::InvalidMaxIter { got: 0 })
    ));
    Ok(())
}
