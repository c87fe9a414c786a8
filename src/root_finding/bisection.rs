//! Bisection method

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::trace::{emit, IterationRecord, LogSink, TraceSink};
use super::traits::RootFinder;

const ALGORITHM: Algorithm = Algorithm::Bisection;

/// Midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (b + a) / 2.0
}

/// Half-width of [a, b], the error bound on the midpoint
#[inline]
fn error_bound(a: f64, b: f64) -> f64 {
    (b - a).abs() / 2.0
}

/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Trace records, when `cfg.verbose()` is set, go to [`LogSink`].
/// See [`bisection_traced`] for the full contract.
#[must_use]
pub fn bisection<F>(func: F, a: f64, b: f64, cfg: &SolverCfg) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
{
    bisection_traced(func, a, b, cfg, &mut LogSink)
}

/// Bisection with a caller-supplied trace sink.
///
/// # Arguments
/// ┌ `func` - the function whose root is sought
/// ├ `a`    - left end of the bracket
/// ├ `b`    - right end of the bracket
/// ├ `cfg`  - [`SolverCfg`] (`x_tol` on the half-width, `f_tol`, `n_max`, `verbose`)
/// └ `sink` - receives one [`IterationRecord::Bisection`] per iteration when verbose
///
/// # Behavior
/// ├ `c = (a + b) / 2`, `err_bound = |b - a| / 2`
/// ├ loop while `err_bound > x_tol` and the budget is not spent:
/// │   ├ evaluate `f(c)`, trace
/// │   ├ evaluate `f(a)` and `f(b)` afresh (no caching across passes)
/// │   ├ `|f(c)| <= f_tol` returns `c` right away
/// │   └ `f(a) * f(c) < 0` keeps `[a, c]`, anything else keeps `[c, b]`
/// └ returns the midpoint of the final bracket
///
/// # Returns
/// [`RootFindingReport`] with
/// ├ `root`        : final midpoint
/// ├ `residual`    : `Some(f(c))` on the residual exit, `None` otherwise
/// │                 (the final midpoint is never evaluated)
/// ├ `termination` : [`TerminationReason::ToleranceReached`] or
/// │                 [`TerminationReason::IterationLimit`]
/// ├ `tolerance`   : [`ToleranceSatisfied::FTolReached`],
/// │                 [`ToleranceSatisfied::WidthTolReached`] or
/// │                 [`ToleranceSatisfied::ToleranceNotReached`]
/// └ `stencil`     : final `[a, b]`
///
/// # Warning
/// ├ The bracket is not validated: with no sign change the bracket slides
/// │ toward `b` and the result is meaningless. Use [`check_bracket`] first
/// │ if that matters.
/// └ `n_max = 0` returns the initial midpoint without evaluating `func`.
///
/// [`check_bracket`]: super::signs::check_bracket
#[must_use]
pub fn bisection_traced<F, S>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: &SolverCfg,
    sink: &mut S,
) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
    S: TraceSink + ?Sized,
{
    let x_tol = cfg.x_tol();
    let f_tol = cfg.f_tol();
    let n_max = cfg.n_max();

    // number of function evaluations
    let mut evals = 0;
    let mut eval = |x: f64| -> f64 {
        evals += 1;
        func(x)
    };

    let mut c         = calculate_bisection(a, b);
    let mut err_bound = error_bound(a, b);
    let mut iter      = 0;

    while err_bound > x_tol {
        if iter == n_max {
            return RootFindingReport::new(ALGORITHM, c, None, Stencil::bracket(a, b))
                .counts(iter, evals)
                .stopped(TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached);
        }
        iter += 1;

        let fc = eval(c);
        emit(cfg, sink, || IterationRecord::Bisection { iter, a, b, c, fc, err_bound });

        let fa = eval(a);
        // evaluated every pass, never consulted
        let _fb = eval(b);

        if fc.abs() <= f_tol {
            return RootFindingReport::new(ALGORITHM, c, Some(fc), Stencil::bracket(a, b))
                .counts(iter, evals)
                .stopped(TerminationReason::ToleranceReached, ToleranceSatisfied::FTolReached);
        }

        // shrink interval
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
        }

        c         = calculate_bisection(a, b);
        err_bound = error_bound(a, b);
    }

    let report = RootFindingReport::new(ALGORITHM, c, None, Stencil::bracket(a, b))
        .counts(iter, evals);

    // NaN bounds fall out of the loop without meeting the width test
    if err_bound <= x_tol {
        report.stopped(TerminationReason::ToleranceReached, ToleranceSatisfied::WidthTolReached)
    } else {
        report.stopped(TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached)
    }
}

/// Bisection over a fixed starting bracket, for use through [`RootFinder`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bisection {
    pub a: f64,
    pub b: f64,
}

impl Bisection {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }
}

impl RootFinder for Bisection {
    fn algorithm(&self) -> Algorithm {
        ALGORITHM
    }

    fn find_root_traced<F, S>(&mut self, func: F, cfg: &SolverCfg, sink: &mut S) -> RootFindingReport
    where
        F: FnMut(f64) -> f64,
        S: TraceSink + ?Sized,
    {
        bisection_traced(func, self.a, self.b, cfg, sink)
    }
}
