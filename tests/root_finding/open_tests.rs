//! tests for the open-method driver (fixed-point and Newton-Raphson)
use rootsweep::functions::{cubic, cubic_deriv, cubic_fixed_point, cubic_fixed_point_deriv};
use rootsweep::root_finding::config::IterationCfg;
use rootsweep::root_finding::errors::DriverError;
use rootsweep::root_finding::open::{run_open, FixedPoint, NewtonRaphson, OpenError};
use rootsweep::root_finding::report::Termination;

type TestResult = Result<(), OpenError>;

#[test]
fn newton_finds_cubic_root() -> TestResult {
    let cfg = IterationCfg::new().with_precision(1e-10);
    let res = run_open(NewtonRaphson::new(cubic, cubic_deriv), 1.0, cfg)?;

    assert_eq!(res.termination, Termination::PrecisionReached);
    assert!((res.root - 0.8893959).abs() < 1e-6);
    assert_eq!(res.iterations, res.trace.len());
    Ok(())
}

#[test]
fn newton_converges_quadratically() -> TestResult {
    let cfg = IterationCfg::new().with_precision(1e-12);
    let res = run_open(NewtonRaphson::new(cubic, cubic_deriv), 1.0, cfg)?;

    // once in the basin, e_{n+1} = O(e_n^2); factor 50 absorbs the constant
    assert!(res.trace.len() >= 3);
    for pair in res.trace.windows(2) {
        assert!(pair[1].error <= pair[0].error * pair[0].error * 50.0);
    }
    Ok(())
}

#[test]
fn fixed_point_converges_without_advisories() -> TestResult {
    let res = run_open(
        FixedPoint::new(cubic_fixed_point, cubic_fixed_point_deriv),
        1.0,
        IterationCfg::new(),
    )?;

    assert_eq!(res.termination, Termination::PrecisionReached);
    assert_eq!(res.advisories, 0);
    assert!((res.root - 0.8893959).abs() < 0.01);
    Ok(())
}

#[test]
fn fixed_point_advisory_fires_near_singular_slope() -> TestResult {
    // |g'(x)| >= 1 for x close enough to 3
    let res = run_open(
        FixedPoint::new(cubic_fixed_point, cubic_fixed_point_deriv),
        2.95,
        IterationCfg::new(),
    )?;

    assert!(res.advisories >= 1);
    assert_eq!(res.termination, Termination::PrecisionReached);
    Ok(())
}

#[test]
fn zero_iterate_rejected() -> TestResult {
    // f(x) = x with f'(x) = 1 steps straight to zero
    let err = run_open(
        NewtonRaphson::new(|x: f64| x, |_| 1.0),
        5.0,
        IterationCfg::new(),
    )
    .unwrap_err();

    assert!(matches!(err, OpenError::ZeroIterate { x } if x == 5.0));
    Ok(())
}

#[test]
fn vanishing_derivative_rejected() -> TestResult {
    let err = run_open(
        NewtonRaphson::new(|x: f64| x - 1.0, |_| 0.0),
        5.0,
        IterationCfg::new(),
    )
    .unwrap_err();

    assert!(matches!(err, OpenError::VanishingDerivative { .. }));
    Ok(())
}

#[test]
fn non_finite_guess_rejected() -> TestResult {
    let err = run_open(
        NewtonRaphson::new(cubic, cubic_deriv),
        f64::NAN,
        IterationCfg::new(),
    )
    .unwrap_err();

    assert!(matches!(err, OpenError::InvalidGuess { .. }));
    Ok(())
}

#[test]
fn non_finite_evaluation_surfaces() -> TestResult {
    // g takes a negative base past x = 3 and returns NaN
    let err = run_open(
        FixedPoint::new(cubic_fixed_point, cubic_fixed_point_deriv),
        4.0,
        IterationCfg::new(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        OpenError::Common(DriverError::NonFiniteEvaluation { .. })
    ));
    Ok(())
}

#[test]
fn oscillating_map_exhausts_budget() -> TestResult {
    // x -> 3 - x flips between two values forever
    let res = run_open(
        FixedPoint::new(|x: f64| 3.0 - x, |_| 0.0),
        1.0,
        IterationCfg::new(),
    )?;

    assert_eq!(res.termination, Termination::BudgetExhausted);
    assert_eq!(res.iterations, 100);
    Ok(())
}

#[test]
fn explicit_budget_caps_oscillating_map() -> TestResult {
    let cfg = IterationCfg::new().with_max_iter(7);
    let res = run_open(FixedPoint::new(|x: f64| 3.0 - x, |_| 0.0), 1.0, cfg)?;

    assert_eq!(res.termination, Termination::BudgetExhausted);
    assert_eq!(res.iterations, 7);
    Ok(())
}

#[test]
fn signed_relative_error_terminates_on_negative_iterate() -> TestResult {
    // new iterate is negative, so the signed relative error is negative
    // and falls below any positive threshold at once
    let res = run_open(
        FixedPoint::new(|_: f64| -1.0, |_| 0.0),
        5.0,
        IterationCfg::new(),
    )?;

    assert_eq!(res.termination, Termination::PrecisionReached);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.root, -1.0);
    Ok(())
}
