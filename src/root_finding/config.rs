//! Shared configuration for root-finding algorithms.
//!
//! [`SolverCfg`] — universal fields
//! ├ `x_tol`   : step (open methods) or half-width (bisection) tolerance
//! ├ `f_tol`   : residual tolerance, |f(x)| <= f_tol
//! ├ `n_max`   : iteration budget, 0 returns the starting estimate
//! └ `verbose` : per-iteration trace toggle
//!
//! Tolerances are validated on the way in, so every solver can take a
//! `&SolverCfg` and run without checking anything itself.

use super::errors::ToleranceError;

pub const DEFAULT_X_TOL: f64 = 1e-10;
pub const DEFAULT_F_TOL: f64 = 1e-10;
pub const DEFAULT_N_MAX: usize = 100;

/// Convergence parameters shared by [`bisection`], [`newton`] and [`secant`].
///
/// # Construction
/// - [`SolverCfg::new`] validates both tolerances at once.
/// - [`SolverCfg::default`] uses `x_tol = f_tol = 1e-10`, `n_max = 100`.
/// - `set_*` setters re-validate; [`SolverCfg::with_verbose`] and
///   [`SolverCfg::with_n_max`] cannot fail.
///
/// # Validation
/// ├ `x_tol` >= 0 (NaN rejected, `+inf` allowed)
/// └ `f_tol` >= 0 (NaN rejected, `+inf` allowed)
///
/// [`bisection`]: super::bisection::bisection
/// [`newton`]: super::newton::newton
/// [`secant`]: super::secant::secant
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    x_tol:   f64,
    f_tol:   f64,
    n_max:   usize,
    verbose: bool,
}

impl SolverCfg {
    pub fn new(x_tol: f64, f_tol: f64, n_max: usize) -> Result<Self, ToleranceError> {
        let cfg = Self::default()
            .set_x_tol(x_tol)?
            .set_f_tol(f_tol)?;
        Ok(cfg.with_n_max(n_max))
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !is_valid_tolerance(v) {
            return Err(ToleranceError::InvalidXTol { got: v });
        }
        self.x_tol = v;
        Ok(self)
    }

    pub fn set_f_tol(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !is_valid_tolerance(v) {
            return Err(ToleranceError::InvalidFTol { got: v });
        }
        self.f_tol = v;
        Ok(self)
    }

    #[must_use]
    pub fn with_n_max(mut self, v: usize) -> Self { self.n_max = v; self }

    #[must_use]
    pub fn with_verbose(mut self, v: bool) -> Self { self.verbose = v; self }

    // getters
    #[inline] #[must_use] pub fn x_tol(&self)   -> f64   { self.x_tol }
    #[inline] #[must_use] pub fn f_tol(&self)   -> f64   { self.f_tol }
    #[inline] #[must_use] pub fn n_max(&self)   -> usize { self.n_max }
    #[inline] #[must_use] pub fn verbose(&self) -> bool  { self.verbose }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            x_tol:   DEFAULT_X_TOL,
            f_tol:   DEFAULT_F_TOL,
            n_max:   DEFAULT_N_MAX,
            verbose: false,
        }
    }
}

#[inline]
fn is_valid_tolerance(v: f64) -> bool {
    // NaN fails the comparison
    v >= 0.0
}
