//! tests for the bisection root finding algorithm
use approx::assert_abs_diff_eq;

use scalar_roots::root_finding::bisection::{bisection, bisection_traced};
use scalar_roots::root_finding::config::SolverCfg;
use scalar_roots::root_finding::errors::{BracketError, ToleranceError};
use scalar_roots::root_finding::report::{Stencil, TerminationReason, ToleranceSatisfied};
use scalar_roots::root_finding::signs::check_bracket;
use scalar_roots::root_finding::trace::IterationRecord;

type TestResult = Result<(), ToleranceError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-10;
    let cfg = SolverCfg::new(tol, tol, 100)?;

    let res = bisection(f, 0.0, 2.0, &cfg);

    assert!(res.converged());
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = tol);
    assert!(res.iterations > 0);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn stops_on_residual_or_width() -> TestResult {
    let c     = 7.0;
    let f     = |x: f64| x * x - c;
    let x_tol = 1e-9;
    let f_tol = 1e-6;
    let cfg   = SolverCfg::new(x_tol, f_tol, 200)?;

    let res = bisection(f, 0.0, 4.0, &cfg);

    match res.tolerance_satisfied {
        ToleranceSatisfied::FTolReached => {
            let residual = res.residual.expect("residual exit carries f(c)");
            assert!(residual.abs() <= f_tol);
        }
        ToleranceSatisfied::WidthTolReached => {
            let Stencil::Bracket { bounds: [a, b] } = res.stencil else {
                panic!("bisection reports a bracket stencil");
            };
            assert!((b - a).abs() / 2.0 <= x_tol);
            assert!((res.root - c.sqrt()).abs() <= x_tol);
        }
        other => panic!("unexpected tolerance outcome {other:?}"),
    }
    Ok(())
}

#[test]
fn residual_exit_returns_midpoint_immediately() -> TestResult {
    let cfg = SolverCfg::new(1e-12, 1e-12, 50)?;
    let res = bisection(|x| x, -1.0, 1.0, &cfg);

    assert_eq!(res.root, 0.0);
    assert_eq!(res.residual, Some(0.0));
    assert_eq!(res.iterations, 1);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::FTolReached);
    Ok(())
}

#[test]
fn high_function_tol_stops_quickly() -> TestResult {
    let cfg = SolverCfg::new(1e-12, 1.0, 5)?;
    let res = bisection(|x| x, -5.0, 1.0, &cfg);

    // c = -2 keeps [c, b], then c = -0.5 is within f_tol
    assert_eq!(res.root, -0.5);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::FTolReached);
    Ok(())
}

#[test]
fn n_max_zero_returns_initial_midpoint() -> TestResult {
    let cfg = SolverCfg::new(1e-12, 1e-12, 0)?;
    let res = bisection(|x| x * x - 2.0, 1.0, 3.0, &cfg);

    assert_eq!(res.root, 2.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 0);
    assert_eq!(res.residual, None);
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    Ok(())
}

#[test]
fn narrow_interval_stops_on_width() -> TestResult {
    let cfg = SolverCfg::new(1e-10, 1e-20, 10)?;
    let res = bisection(|x| x - 1.0, 1.0, 1.0 + 1e-12, &cfg);

    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 0);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let niter = 10;
    let cfg   = SolverCfg::new(0.0, 0.0, niter)?;
    let res   = bisection(|x| x - 0.3, -3.0, 2.0, &cfg);

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, niter);
    assert!(!res.converged());
    Ok(())
}

#[test]
fn reevaluates_both_endpoints_every_pass() -> TestResult {
    let mut calls = Vec::new();
    let cfg = SolverCfg::new(0.0, 0.0, 3)?;
    let res = bisection(|x| { calls.push(x); x - 0.3 }, 0.0, 1.0, &cfg);

    assert_eq!(res.evaluations, 9);
    // f(c), f(a), f(b) per pass
    assert_eq!(calls, vec![0.5, 0.0, 1.0, 0.25, 0.0, 0.5, 0.375, 0.25, 0.5]);
    Ok(())
}

#[test]
fn width_halves_every_iteration() -> TestResult {
    let cfg = SolverCfg::new(0.0, 0.0, 20)?.with_verbose(true);
    let mut trace: Vec<IterationRecord> = Vec::new();
    let res = bisection_traced(|x| x - 0.3, 0.0, 1.0, &cfg, &mut trace);

    assert_eq!(trace.len(), res.iterations);
    for (k, record) in trace.iter().enumerate() {
        let IterationRecord::Bisection { iter, a, b, err_bound, .. } = *record else {
            panic!("bisection emits bisection records");
        };
        assert_eq!(iter, k + 1);
        assert_eq!(err_bound, 0.5_f64.powi(iter as i32));
        assert_eq!(b - a, 2.0 * err_bound);
    }

    let bounds = res.stencil.stencil();
    assert_eq!(bounds[1] - bounds[0], 0.5_f64.powi(20));
    Ok(())
}

#[test]
fn quiet_run_emits_nothing() -> TestResult {
    let cfg = SolverCfg::new(1e-8, 1e-8, 100)?;
    let mut trace: Vec<IterationRecord> = Vec::new();
    let res = bisection_traced(|x| x * x - 2.0, 0.0, 2.0, &cfg, &mut trace);

    assert!(res.iterations > 0);
    assert!(trace.is_empty());
    Ok(())
}

#[test]
fn reversed_bounds_still_converge() -> TestResult {
    let cfg = SolverCfg::new(1e-12, 0.0, 100)?;
    let res = bisection(|x| x - 0.3, 1.0, 0.0, &cfg);

    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_abs_diff_eq!(res.root, 0.3, epsilon = 1e-12);
    Ok(())
}

#[test]
fn no_sign_change_is_silent() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let cfg = SolverCfg::new(0.0, 1e-10, 10)?;
    let res = bisection(f, -1.0, 1.0, &cfg);

    // f(a) * f(c) > 0 always keeps [c, b], so the midpoint slides toward b
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert!(res.root > 0.99 && res.root < 1.0);

    let err = check_bracket(f, -1.0, 1.0).unwrap_err();
    assert!(matches!(err, BracketError::NoSignChange { a, b, .. } if a == -1.0 && b == 1.0));
    Ok(())
}

#[test]
fn repeated_calls_are_bit_identical() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let cfg = SolverCfg::new(1e-13, 1e-15, 100)?;

    let first  = bisection(f, 0.0, 1.0, &cfg);
    let second = bisection(f, 0.0, 1.0, &cfg);

    assert_eq!(first.root.to_bits(), second.root.to_bits());
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn report_converts_to_plain_root() -> TestResult {
    let cfg  = SolverCfg::new(1e-12, 1e-12, 100)?;
    let root: f64 = bisection(|x| 2.0 * x - 6.0, 0.0, 10.0, &cfg).into();

    assert_abs_diff_eq!(root, 3.0, epsilon = 1e-12);
    Ok(())
}
