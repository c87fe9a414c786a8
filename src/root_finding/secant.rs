use log::debug;

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::trace::{emit, IterationRecord, LogSink, TraceSink};
use super::traits::RootFinder;

const ALGORITHM: Algorithm = Algorithm::Secant;

/// Secant step `d` for the line through `(x0, f0)` and `(x1, f1)`;
/// the next iterate is `x1 - d`.
///
/// Returns `None` when `f1 - f0` is exactly zero.
#[inline]
fn secant_step((x0, f0): (f64, f64), (x1, f1): (f64, f64)) -> Option<f64> {
    let denom = f1 - f0;
    if denom == 0.0 {
        return None;
    }
    Some((x1 - x0) * f1 / denom)
}

/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Trace records, when `cfg.verbose()` is set, go to [`LogSink`].
/// See [`secant_traced`] for the full contract.
#[must_use]
pub fn secant<F>(func: F, x0: f64, x1: f64, cfg: &SolverCfg) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
{
    secant_traced(func, x0, x1, cfg, &mut LogSink)
}

/// Secant method with a caller-supplied trace sink.
///
/// # Arguments
/// - `func` : the function whose root is to be found
/// - `x0`   : first initial guess
/// - `x1`   : second initial guess, returned as-is if the run never steps
/// - `cfg`  : [`SolverCfg`] (`x_tol` on the step, `f_tol`, `n_max`, `verbose`)
/// - `sink` : receives one [`IterationRecord::Secant`] per step when verbose
///
/// # Behavior
/// - `f(x0)` and `f(x1)` are evaluated once up front, even when `n_max = 0`
/// - Update:
///     - `d = (x1 - x0) * f(x1) / (f(x1) - f(x0))`
///     - window shifts: `x0 <- x1`, `x1 <- x1 - d`, then `f(x1)` is re-evaluated
/// - `f(x1) - f(x0) == 0.0` (exactly) stops the run and returns `x1` with
///   [`TerminationReason::FlatSecant`]
/// - stops when `|d| <= x_tol` or `|f(x1)| <= f_tol`, using the freshly
///   evaluated `f(x1)`
/// - after `n_max` passes the last `x1` is returned
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`       : final `x1`
/// - `residual`   : `Some(f(root))`, always known
/// - `iterations` : completed steps
/// - `stencil`    : the pair `{x0, x1}` the last step was formed from
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method**
///   (e.g. [`bisection`](super::bisection::bisection)).
#[must_use]
pub fn secant_traced<F, S>(
    mut func: F,
    mut x0: f64,
    mut x1: f64,
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

    // track function evaluations
    let mut evals = 0;
    let mut eval = |x: f64| -> f64 {
        evals += 1;
        func(x)
    };

    let mut f0 = eval(x0);
    let mut f1 = eval(x1);

    // the pair the current x1 was formed from
    let mut parents = (x0, x1);

    for iter in 1..=n_max {
        let Some(step) = secant_step((x0, f0), (x1, f1)) else {
            debug!("{ALGORITHM}: flat secant f(x1) - f(x0) == 0 at x0={x0}, x1={x1} on iteration {iter}");
            return RootFindingReport::new(ALGORITHM, x1, Some(f1), Stencil::doubleton(parents.0, parents.1))
                .counts(iter - 1, evals)
                .stopped(TerminationReason::FlatSecant, ToleranceSatisfied::ToleranceNotReached);
        };

        parents = (x0, x1);
        x0 = x1;
        f0 = f1;
        x1 -= step;
        f1 = eval(x1);

        emit(cfg, sink, || IterationRecord::Secant { iter, x: x1, fx: f1, step });

        let satisfied = if step.abs() <= x_tol {
            Some(ToleranceSatisfied::StepTolReached)
        } else if f1.abs() <= f_tol {
            Some(ToleranceSatisfied::FTolReached)
        } else {
            None
        };

        if let Some(tol) = satisfied {
            return RootFindingReport::new(ALGORITHM, x1, Some(f1), Stencil::doubleton(parents.0, parents.1))
                .counts(iter, evals)
                .stopped(TerminationReason::ToleranceReached, tol);
        }
    }

    RootFindingReport::new(ALGORITHM, x1, Some(f1), Stencil::doubleton(parents.0, parents.1))
        .counts(n_max, evals)
        .stopped(TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached)
}

/// Secant method from two fixed seeds, for use through [`RootFinder`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Secant {
    pub x0: f64,
    pub x1: f64,
}

impl Secant {
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }
}

impl RootFinder for Secant {
    fn algorithm(&self) -> Algorithm {
        ALGORITHM
    }

    fn find_root_traced<F, S>(&mut self, func: F, cfg: &SolverCfg, sink: &mut S) -> RootFindingReport
    where
        F: FnMut(f64) -> f64,
        S: TraceSink + ?Sized,
    {
        secant_traced(func, self.x0, self.x1, cfg, sink)
    }
}
