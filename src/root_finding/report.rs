//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

use super::algorithms::Algorithm;

/// Reasons a root-finding algorithm may terminate.
/// - [`TerminationReason::ToleranceReached`] : see [`ToleranceSatisfied`]
/// - [`TerminationReason::IterationLimit`]   : `n_max` iterations ran out
/// - [`TerminationReason::ZeroDerivative`]   : newton hit `f'(x) == 0.0`
/// - [`TerminationReason::FlatSecant`]       : secant hit `f(x1) - f(x0) == 0.0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    ZeroDerivative,
    FlatSecant,
}

/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::FTolReached`]
///     - All methods
///     - |f(x)| <= f_tol
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - [`Algorithm::Bisection`]
///     - |b - a| / 2 <= x_tol
/// - [`ToleranceSatisfied::StepTolReached`]
///     - [`Algorithm::Newton`], [`Algorithm::Secant`]
///     - |x_n - x_{n - 1}| <= x_tol
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - Iteration limit or degenerate step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    FTolReached,
    WidthTolReached,
    StepTolReached,
    ToleranceNotReached,
}

/// Method-specific data returned by a solver.
/// Contains the last set of points the solver held when it stopped.
/// - [`Stencil::Bracket`] : bisection
///     - `bounds` = final `[a, b]`
/// - [`Stencil::Open`]    : newton (`len = 1`) and secant (`len = 2`)
///     - `x` = previous iterate(s), oldest first
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize },
}

impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self {
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x0: f64, x1: f64) -> Self {
        Stencil::Open { x: [x0, x1], len: 2 }
    }
}

/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `residual`            : `f(root)` if the solver evaluated it, else `None`
/// - `iterations`          : loop passes that ran (0 if the solver stopped before the first)
/// - `evaluations`         : total calls to `f` (and `f'` for newton)
/// - `termination_reason`  : why the solver stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `stencil`             : last points held by the solver ([`Stencil`])
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingReport {
    pub root                : f64,
    pub residual            : Option<f64>,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub stencil             : Stencil,
    pub algorithm_name      : &'static str,
}

impl RootFindingReport {
    /// Plain root estimate, as returned by the bare numeric contract.
    #[inline]
    pub fn root(&self) -> f64 {
        self.root
    }

    /// `true` when a tolerance test stopped the solver.
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }

    /// `true` when a zero derivative or flat secant cut the run short.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self.termination_reason,
            TerminationReason::ZeroDerivative | TerminationReason::FlatSecant
        )
    }

    pub(crate) fn new(
        algorithm : Algorithm,
        root      : f64,
        residual  : Option<f64>,
        stencil   : Stencil,
    ) -> Self {
        Self {
            root,
            residual,
            iterations          : 0,
            evaluations         : 0,
            termination_reason  : TerminationReason::IterationLimit,
            tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
            stencil,
            algorithm_name      : algorithm.algorithm_name(),
        }
    }

    pub(crate) fn counts(mut self, iterations: usize, evaluations: usize) -> Self {
        self.iterations  = iterations;
        self.evaluations = evaluations;
        self
    }

    pub(crate) fn stopped(mut self, reason: TerminationReason, tol: ToleranceSatisfied) -> Self {
        self.termination_reason  = reason;
        self.tolerance_satisfied = tol;
        self
    }
}

impl From<RootFindingReport> for f64 {
    fn from(report: RootFindingReport) -> Self {
        report.root
    }
}
