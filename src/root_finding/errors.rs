//! Root-finding error types.
//!
//! The solvers themselves never fail: degenerate steps and exhausted budgets
//! are reported through [`RootFindingReport`]. Errors only arise at the edges.
//!
//! ┌ [`ToleranceError`] : invalid convergence parameters in [`SolverCfg`]
//! │   ├ negative or NaN `x_tol`
//! │   └ negative or NaN `f_tol`
//! │
//! └ [`BracketError`]   : opt-in bracket validation ([`check_bracket`])
//!     ├ non-finite or unordered bounds
//!     ├ non-finite function value at a bound
//!     └ no sign change across the bracket
//!
//! [`RootFindingReport`]: super::report::RootFindingReport
//! [`SolverCfg`]: super::config::SolverCfg
//! [`check_bracket`]: super::signs::check_bracket

use thiserror::Error;

/// Convergence parameter errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToleranceError {
    #[error("invalid `x_tol` tolerance: must be >= 0. got {got}")]
    InvalidXTol { got: f64 },

    #[error("invalid `f_tol` tolerance: must be >= 0. got {got}")]
    InvalidFTol { got: f64 },
}

/// Bracket validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BracketError {
    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },
}
