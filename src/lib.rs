//! Iterative root finding for scalar real functions.
//!
//! Three independent solvers live under [`root_finding`]:
//! - [`root_finding::bisection`] : bracketing, needs a sign change on `[a, b]`
//! - [`root_finding::newton`]    : derivative-based, one starting point
//! - [`root_finding::secant`]    : derivative-free, two starting points
//!
//! Every solver returns a [`RootFindingReport`]; the plain root is
//! `report.root`.
//!
//! ```
//! use scalar_roots::{newton, SolverCfg};
//!
//! let cfg = SolverCfg::new(1e-10, 1e-10, 100).unwrap();
//! let report = newton(|x| x * x - 2.0, |x| 2.0 * x, 1.0, &cfg);
//!
//! assert!((report.root - 2.0_f64.sqrt()).abs() <= 1e-10);
//! ```

pub mod root_finding;

pub use root_finding::algorithms::Algorithm;
pub use root_finding::bisection::{bisection, bisection_traced, Bisection};
pub use root_finding::config::SolverCfg;
pub use root_finding::errors::{BracketError, ToleranceError};
pub use root_finding::newton::{newton, newton_traced, Newton};
pub use root_finding::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
pub use root_finding::secant::{secant, secant_traced, Secant};
pub use root_finding::signs::check_bracket;
pub use root_finding::trace::{IterationRecord, LogSink, TraceSink};
pub use root_finding::traits::RootFinder;
