//! Newton-Raphson method

use log::debug;

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::trace::{IterationRecord, LogSink, TraceSink};
use super::traits::RootFinder;

const ALGORITHM: Algorithm = Algorithm::Newton;

/// Evaluates `f(x)`, counting the call.
#[inline]
fn eval_fx<F>(f: &mut F, x: f64, evals: &mut usize) -> f64
where
    F: FnMut(f64) -> f64,
{
    *evals += 1;
    f(x)
}

/// Evaluates the user-supplied derivative `df(x)`, counting the call.
#[inline]
fn eval_dfx<G>(df: &mut G, x: f64, evals: &mut usize) -> f64
where
    G: FnMut(f64) -> f64,
{
    *evals += 1;
    df(x)
}

/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// Trace records, when `cfg.verbose()` is set, go to [`LogSink`].
/// See [`newton_traced`] for the full contract.
#[must_use]
pub fn newton<F, G>(func: F, dfunc: G, x0: f64, cfg: &SolverCfg) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    newton_traced(func, dfunc, x0, cfg, &mut LogSink)
}

/// Newton–Raphson with a caller-supplied trace sink.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : initial guess
/// - `cfg`   : [`SolverCfg`] (`x_tol` on the step, `f_tol`, `n_max`, `verbose`)
/// - `sink`  : receives one [`IterationRecord::Newton`] per step when verbose
///
/// # Behavior
/// - each pass evaluates `f(x)` and `f'(x)`
/// - `f'(x) == 0.0` (exactly) stops the run and returns the current `x`
///   with [`TerminationReason::ZeroDerivative`]
/// - otherwise `d = f(x) / f'(x)` and `x <- x - d`
/// - verbose runs evaluate `f` once more at the new `x` for the trace record;
///   quiet runs skip that call
/// - stops when `|d| <= x_tol` or `|f(x)| <= f_tol`, where `f(x)` is the
///   residual from *before* the step
/// - after `n_max` passes the last iterate is returned
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`      : final iterate
/// - `residual`  : `f(root)` when known (verbose runs, or the zero-derivative stop)
/// - `iterations`: completed steps; the zero-derivative pass does not count
/// - `stencil`   : iterate the last step was taken from
///
/// # Notes
/// - `n_max = 0` returns `x0` without evaluating anything
/// - Convergence is *local only* and depends on a good initial guess `x0` and
///   smoothness of `f`. For guaranteed convergence, use a **bracketed method**
///   (e.g. [`bisection`](super::bisection::bisection)).
#[must_use]
pub fn newton_traced<F, G, S>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: &SolverCfg,
    sink: &mut S,
) -> RootFindingReport
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
    S: TraceSink + ?Sized,
{
    let x_tol = cfg.x_tol();
    let f_tol = cfg.f_tol();
    let n_max = cfg.n_max();

    let mut evals: usize = 0;

    let mut x        = x0;
    let mut prev_x   = x0;
    let mut residual = None;

    for iter in 1..=n_max {
        let fx  = eval_fx(&mut func, x, &mut evals);
        let dfx = eval_dfx(&mut dfunc, x, &mut evals);

        // avoid division by zero
        if dfx == 0.0 {
            debug!("{ALGORITHM}: zero derivative at x={x} on iteration {iter}");
            return RootFindingReport::new(ALGORITHM, x, Some(fx), Stencil::singleton(prev_x))
                .counts(iter - 1, evals)
                .stopped(TerminationReason::ZeroDerivative, ToleranceSatisfied::ToleranceNotReached);
        }

        let step = fx / dfx;
        prev_x   = x;
        x       -= step;
        residual = None;

        if cfg.verbose() {
            let fx_next = eval_fx(&mut func, x, &mut evals);
            residual = Some(fx_next);
            sink.record(&IterationRecord::Newton { iter, x, fx: fx_next, step });
        }

        // fx is the residual at the previous iterate
        let satisfied = if step.abs() <= x_tol {
            Some(ToleranceSatisfied::StepTolReached)
        } else if fx.abs() <= f_tol {
            Some(ToleranceSatisfied::FTolReached)
        } else {
            None
        };

        if let Some(tol) = satisfied {
            return RootFindingReport::new(ALGORITHM, x, residual, Stencil::singleton(prev_x))
                .counts(iter, evals)
                .stopped(TerminationReason::ToleranceReached, tol);
        }
    }

    RootFindingReport::new(ALGORITHM, x, residual, Stencil::singleton(prev_x))
        .counts(n_max, evals)
        .stopped(TerminationReason::IterationLimit, ToleranceSatisfied::ToleranceNotReached)
}

/// Newton–Raphson from a fixed seed with its derivative, for use through [`RootFinder`].
#[derive(Debug, Copy, Clone)]
pub struct Newton<G> {
    pub df: G,
    pub x0: f64,
}

impl<G> Newton<G>
where
    G: FnMut(f64) -> f64,
{
    pub fn new(df: G, x0: f64) -> Self {
        Self { df, x0 }
    }
}

impl<G> RootFinder for Newton<G>
where
    G: FnMut(f64) -> f64,
{
    fn algorithm(&self) -> Algorithm {
        ALGORITHM
    }

    fn find_root_traced<F, S>(&mut self, func: F, cfg: &SolverCfg, sink: &mut S) -> RootFindingReport
    where
        F: FnMut(f64) -> f64,
        S: TraceSink + ?Sized,
    {
        newton_traced(func, &mut self.df, self.x0, cfg, sink)
    }
}
