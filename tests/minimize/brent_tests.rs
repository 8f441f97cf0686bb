//! tests for Brent's minimization method
use brent_search::minimize::brent::{brent, BrentCfg, BrentError};
use brent_search::minimize::errors::ConfigError;
use brent_search::minimize::report::{Bracket, Point, TerminationReason};
use std::f64::consts::PI;

type TestResult = Result<(), BrentError>;

fn bracket_of<F>(f: F, xs: [f64; 3]) -> Bracket
where F: Fn(f64) -> f64 {
    Bracket {
        low:  Point::new(xs[0], f(xs[0])),
        mid:  Point::new(xs[1], f(xs[1])),
        high: Point::new(xs[2], f(xs[2])),
    }
}

#[test]
fn refines_parabola() -> TestResult {
    let f       = |x: f64| (x - 2.0) * (x - 2.0);
    let bracket = bracket_of(f, [0.0, 1.0, 5.0]);
    let res     = brent(f, &bracket, BrentCfg::new())?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!((res.x_min - 2.0).abs() <= 1e-8);
    assert!(res.f_min <= 1e-16);
    assert!(res.interval[0] <= res.x_min && res.x_min <= res.interval[1]);
    assert_eq!(res.algorithm_name, "brent");
    Ok(())
}

#[test]
fn refines_cosine_to_pi() -> TestResult {
    let f       = |x: f64| x.cos();
    let bracket = bracket_of(f, [2.0, 3.0, 4.0]);
    let res     = brent(f, &bracket, BrentCfg::new())?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!((res.x_min - PI).abs() <= 1e-6);
    assert!((res.f_min + 1.0).abs() <= 1e-12);
    Ok(())
}

#[test]
fn refines_non_smooth_kink() -> TestResult {
    let f       = |x: f64| (x - 1.5).abs();
    let bracket = bracket_of(f, [0.0, 1.0, 4.0]);
    let res     = brent(f, &bracket, BrentCfg::new())?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!((res.x_min - 1.5).abs() <= 1e-6);
    Ok(())
}

#[test]
fn bracket_points_are_not_reevaluated() -> TestResult {
    let f       = |x: f64| (x - 2.0) * (x - 2.0);
    let bracket = bracket_of(f, [0.0, 1.0, 5.0]);

    let mut calls = 0;
    let counted = |x: f64| {
        calls += 1;
        f(x)
    };
    let res = brent(counted, &bracket, BrentCfg::new())?;

    assert_eq!(res.evaluations, calls);
    assert_eq!(res.evaluations, res.iterations);
    Ok(())
}

#[test]
fn reports_iteration_limit() -> TestResult {
    let f       = |x: f64| x.cos();
    let bracket = bracket_of(f, [2.0, 3.0, 4.0]);
    let cfg     = BrentCfg::new().set_max_iter(2)?;
    let res     = brent(f, &bracket, cfg)?;

    assert_eq!(res.termination, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.evaluations, 2);
    Ok(())
}

#[test]
fn looser_tolerance_needs_fewer_evaluations() -> TestResult {
    let f       = |x: f64| (x - 1.5).abs();
    let bracket = bracket_of(f, [0.0, 1.0, 4.0]);

    let tight = brent(f, &bracket, BrentCfg::new())?;
    let loose = brent(f, &bracket, BrentCfg::new().set_rel_tol(1e-3)?.set_abs_tol(1e-3)?)?;

    assert!(loose.evaluations < tight.evaluations);
    assert!((loose.x_min - 1.5).abs() <= 1e-2);
    Ok(())
}

#[test]
fn collapsed_bracket_converges_without_evaluating() -> TestResult {
    let f       = |x: f64| x;
    let bracket = bracket_of(f, [1.0, 1.0, 1.0]);
    let res     = brent(f, &bracket, BrentCfg::new())?;

    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert_eq!(res.x_min, 1.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 0);
    Ok(())
}

#[test]
fn rejects_unordered_bracket() {
    let f       = |x: f64| x * x;
    let bracket = bracket_of(f, [0.0, 2.0, 1.0]);
    let err     = brent(f, &bracket, BrentCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        BrentError::InvalidBracket { low, mid, high } if low == 0.0 && mid == 2.0 && high == 1.0
    ));
}

#[test]
fn rejects_non_finite_bracket() {
    let f       = |x: f64| x * x;
    let bracket = bracket_of(f, [-1.0, 0.0, f64::INFINITY]);
    let err     = brent(f, &bracket, BrentCfg::new()).unwrap_err();

    assert!(matches!(err, BrentError::InvalidBracket { .. }));
}

#[test]
fn rejects_zero_max_iter() {
    let err = BrentCfg::new().set_max_iter(0).unwrap_err();
    assert_eq!(err, ConfigError::InvalidMaxIter { got: 0 });
}
