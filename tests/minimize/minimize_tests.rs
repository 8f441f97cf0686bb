//! tests for the bracket + brent orchestration
use brent_search::minimize::brent::BrentError;
use brent_search::minimize::errors::ConfigError;
use brent_search::minimize::optimize::{minimize, minimize_strict, MinimizeCfg, MinimizeError};
use brent_search::minimize::report::{BracketStatus, TerminationReason};
use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;

type TestResult = Result<(), MinimizeError>;

/// `max(rel_tol * |c|, abs_tol)` with the orchestrator defaults
fn resolution(c: f64) -> f64 {
    (c.abs() * MinimizeCfg::DEFAULT_REL_TOL).max(MinimizeCfg::DEFAULT_ABS_TOL)
}

#[test]
fn minimizes_shifted_parabola() -> TestResult {
    let f   = |x: f64| (x - 2.0) * (x - 2.0);
    let res = minimize(f, MinimizeCfg::new())?;

    assert_eq!(res.bracket_status, BracketStatus::Found);
    assert_eq!(res.termination, TerminationReason::ToleranceReached);
    assert!((res.x_min - 2.0).abs() <= resolution(2.0));
    assert!(res.f_min <= resolution(2.0) * resolution(2.0));
    assert!(res.evaluations > 0 && res.evaluations < 30);
    assert_eq!(res.algorithm_name, "minimize");
    Ok(())
}

#[test]
fn parabola_minimum_resolved_at_any_centre() -> TestResult {
    let centres = [2.0, -3.7, 0.0, 1e3, -1234.5678, 1e6, 1e-3, -1e-3, 42.0, 7.25];

    for c in centres {
        let f   = |x: f64| (x - c) * (x - c);
        let res = minimize(f, MinimizeCfg::new())?;

        assert_eq!(res.bracket_status, BracketStatus::Found, "centre {c}");
        assert!((res.x_min - c).abs() <= resolution(c), "centre {c}: x_min {}", res.x_min);
        assert!(res.f_min <= resolution(c) * resolution(c), "centre {c}: f_min {}", res.f_min);
    }
    Ok(())
}

#[test]
fn evaluations_match_objective_calls() -> TestResult {
    let calls = Cell::new(0_usize);
    let f = |x: f64| {
        calls.set(calls.get() + 1);
        (x - 7.0).powi(2) + 0.5 * (x - 7.0).powi(4)
    };
    let res = minimize(f, MinimizeCfg::new())?;

    assert_eq!(res.evaluations, calls.get());
    assert!((res.x_min - 7.0).abs() <= 1e-6);
    Ok(())
}

#[test]
fn repeated_calls_are_bit_identical() -> TestResult {
    let f = |x: f64| (x - 0.75).powi(2) + (3.0 * x).sin();
    let first  = minimize(f, MinimizeCfg::new())?;
    let second = minimize(f, MinimizeCfg::new())?;

    assert_eq!(first.x_min.to_bits(), second.x_min.to_bits());
    assert_eq!(first.f_min.to_bits(), second.f_min.to_bits());
    assert_eq!(first.evaluations, second.evaluations);
    assert_eq!(first.bracket, second.bracket);
    Ok(())
}

#[test]
fn uses_start_points() -> TestResult {
    let f   = |x: f64| (x - 100.0) * (x - 100.0) + 3.0;
    let cfg = MinimizeCfg::new().set_x0(90.0)?.set_x1(91.0)?;
    let res = minimize(f, cfg)?;

    assert_eq!(res.bracket_status, BracketStatus::Found);
    assert!((res.x_min - 100.0).abs() <= 1e-6);
    assert!((res.f_min - 3.0).abs() <= 1e-12);
    assert!(res.evaluations < 20);
    Ok(())
}

#[test]
fn finds_local_minimum_downhill_of_start() -> TestResult {
    // sin rises from 0 to the right, so the search walks left to -pi/2
    let res = minimize(f64::sin, MinimizeCfg::new())?;

    assert_eq!(res.bracket_status, BracketStatus::Found);
    assert!((res.x_min + FRAC_PI_2).abs() <= 1e-6);
    assert!((res.f_min + 1.0).abs() <= 1e-12);
    Ok(())
}

#[test]
fn minimizes_inside_bounds() -> TestResult {
    let f   = |x: f64| (x - 0.3) * (x - 0.3);
    let cfg = MinimizeCfg::new().set_bounds(0.0, 1.0)?;
    let res = minimize(f, cfg)?;

    assert_eq!(res.bracket_status, BracketStatus::Found);
    assert!((res.x_min - 0.3).abs() <= 1e-6);
    Ok(())
}

#[test]
fn refines_even_without_valid_bracket() -> TestResult {
    let f   = |x: f64| -x;
    let cfg = MinimizeCfg::new().set_bounds(0.0, 1.0)?;
    let res = minimize(f, cfg)?;

    assert_eq!(res.bracket_status, BracketStatus::HitBoundary);
    assert_eq!(res.bracket.high.x, 1.0);
    assert!(res.x_min >= 0.0 && res.x_min <= 1.0);
    assert!((res.x_min - 1.0).abs() <= 1e-6);
    Ok(())
}

#[test]
fn strict_variant_reports_boundary_hit() -> TestResult {
    let f   = |x: f64| -x;
    let cfg = MinimizeCfg::new().set_bounds(0.0, 1.0)?;
    let err = minimize_strict(f, cfg).unwrap_err();

    assert!(matches!(
        err,
        MinimizeError::BracketNotFound { status: BracketStatus::HitBoundary, bracket }
        if bracket.high.x == 1.0
    ));
    Ok(())
}

#[test]
fn strict_variant_reports_flat_function() -> TestResult {
    let f   = |_: f64| 1.0;
    let cfg = MinimizeCfg::new().set_x0(0.0)?.set_x1(1.0)?;
    let err = minimize_strict(f, cfg).unwrap_err();

    assert!(matches!(
        err,
        MinimizeError::BracketNotFound { status: BracketStatus::NotStrictlyConvex, .. }
    ));
    Ok(())
}

#[test]
fn strict_variant_matches_default_on_success() -> TestResult {
    let f = |x: f64| (x + 4.0).powi(2);
    let lenient = minimize(f, MinimizeCfg::new())?;
    let strict  = minimize_strict(f, MinimizeCfg::new())?;

    assert_eq!(lenient.x_min.to_bits(), strict.x_min.to_bits());
    assert_eq!(lenient.evaluations, strict.evaluations);
    Ok(())
}

#[test]
fn overflowing_expansion_is_rejected_by_refinement() -> TestResult {
    let f   = |x: f64| -x;
    let cfg = MinimizeCfg::new().set_gfactor(1e10)?;
    let err = minimize(f, cfg).unwrap_err();

    assert!(matches!(
        err,
        MinimizeError::Brent(BrentError::InvalidBracket { high, .. }) if high == f64::INFINITY
    ));

    let err = minimize_strict(f, cfg).unwrap_err();
    assert!(matches!(
        err,
        MinimizeError::BracketNotFound { status: BracketStatus::HitBoundary, bracket }
        if bracket.high.x == f64::INFINITY
    ));
    Ok(())
}

#[test]
fn rejects_invalid_config() {
    let err = MinimizeCfg::new().set_gfactor(0.5).unwrap_err();
    assert_eq!(err, ConfigError::InvalidGrowthFactor { got: 0.5 });

    let err = MinimizeCfg::new().set_bounds(f64::NAN, 1.0).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBounds { .. }));
}

#[test]
fn rejects_start_point_outside_bounds() -> TestResult {
    let f   = |x: f64| x * x;
    let cfg = MinimizeCfg::new().set_bounds(-1.0, 1.0)?.set_x0(2.0)?;
    let err = minimize(f, cfg).unwrap_err();

    assert!(matches!(
        err,
        MinimizeError::Config(ConfigError::InvalidStartPoint { x, .. }) if x == 2.0
    ));
    Ok(())
}
