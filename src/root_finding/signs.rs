//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have opposite sign
//! - `same_sign`     : `true` if values share the same sign
//! - [`check_bracket`] : opt-in validation of a bisection bracket

use super::errors::BracketError;

/// Returns `true` if `x` and `y` have opposite signs.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}

/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    !opposite_sign(x, y)
}

/// Checks that `[a, b]` is a usable bisection bracket for `func`.
///
/// [`bisection`] accepts any interval and never looks at the sign of
/// `f(b)`; callers who want the precondition enforced run this first.
/// An endpoint where `f` is exactly zero counts as bracketing.
///
/// # Errors
/// ┌ [`BracketError::InvalidBounds`]       - `a` or `b` is NaN/inf, or `a >= b`
/// ├ [`BracketError::NonFiniteEvaluation`] - `func(a)` or `func(b)` is NaN/inf
/// └ [`BracketError::NoSignChange`]        - `func(a)` and `func(b)` share a sign
///
/// [`bisection`]: super::bisection::bisection
pub fn check_bracket<F>(mut func: F, a: f64, b: f64) -> Result<(), BracketError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BracketError::InvalidBounds { a, b });
    }

    let mut eval = |x: f64| -> Result<f64, BracketError> {
        let fx = func(x);
        if !fx.is_finite() {
            return Err(BracketError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    };

    let fa = eval(a)?;
    let fb = eval(b)?;
    if fa != 0.0 && fb != 0.0 && same_sign(fa, fb) {
        return Err(BracketError::NoSignChange { a, b, fa, fb });
    }

    Ok(())
}
