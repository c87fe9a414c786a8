//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods
//! and the names reported in [`RootFindingReport::algorithm_name`].
//!
//! [`RootFindingReport::algorithm_name`]: super::report::RootFindingReport::algorithm_name

/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`] : bracketing method
/// - [`Algorithm::Newton`]    : open method, one point plus derivative
/// - [`Algorithm::Secant`]    : open method, two points
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bisection,
    Newton,
    Secant,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection => "bisection",
            Algorithm::Newton    => "newton",
            Algorithm::Secant    => "secant",
        }
    }

    /// `true` for methods that keep a bracket `[a, b]` around the root.
    pub const fn is_bracketing(self) -> bool {
        matches!(self, Algorithm::Bisection)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
