//! Per-iteration diagnostic trace.
//!
//! When [`SolverCfg::verbose`] is set, each solver hands one
//! [`IterationRecord`] per iteration to a caller-supplied [`TraceSink`].
//! The record's `Display` impl renders the human-readable trace line; the
//! format is advisory and not meant to be parsed.
//!
//! Sinks
//! ├ closures `FnMut(&IterationRecord)`
//! ├ `Vec<IterationRecord>` : collects every record
//! ├ `()`                   : discards everything
//! └ [`LogSink`]            : forwards to the `log` facade
//!
//! [`SolverCfg::verbose`]: super::config::SolverCfg::verbose

use std::fmt;

use log::info;

use super::algorithms::Algorithm;
use super::config::SolverCfg;

/// Log target used by [`LogSink`].
pub const TRACE_TARGET: &str = "scalar_roots::trace";

/// One iteration's intermediate quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationRecord {
    /// Emitted before the bracket update, with the bracket the midpoint came from.
    Bisection {
        iter      : usize,
        a         : f64,
        b         : f64,
        c         : f64,
        fc        : f64,
        err_bound : f64,
    },
    /// Emitted after the update; `fx` is `f` at the new `x`.
    Newton {
        iter : usize,
        x    : f64,
        fx   : f64,
        step : f64,
    },
    /// Emitted after the update; `fx` is `f` at the new `x`.
    Secant {
        iter : usize,
        x    : f64,
        fx   : f64,
        step : f64,
    },
}

impl IterationRecord {
    /// 1-based iteration index.
    pub fn iter(&self) -> usize {
        match *self {
            IterationRecord::Bisection { iter, .. }
            | IterationRecord::Newton { iter, .. }
            | IterationRecord::Secant { iter, .. } => iter,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            IterationRecord::Bisection { .. } => Algorithm::Bisection,
            IterationRecord::Newton { .. }    => Algorithm::Newton,
            IterationRecord::Secant { .. }    => Algorithm::Secant,
        }
    }

    /// Current root estimate carried by the record.
    pub fn estimate(&self) -> f64 {
        match *self {
            IterationRecord::Bisection { c, .. } => c,
            IterationRecord::Newton { x, .. } | IterationRecord::Secant { x, .. } => x,
        }
    }
}

impl fmt::Display for IterationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IterationRecord::Bisection { iter, a, b, c, fc, err_bound } => write!(
                f,
                "iter {iter}  a = {a}  b = {b}  c = {c}  f(c) = {fc}  err_bound = {err_bound}"
            ),
            IterationRecord::Newton { iter, x, fx, step }
            | IterationRecord::Secant { iter, x, fx, step } => {
                write!(f, "iter {iter}  x = {x}  f(x) = {fx}  step = {step}")
            }
        }
    }
}

/// Receives the per-iteration trace of a solver run.
pub trait TraceSink {
    fn record(&mut self, record: &IterationRecord);
}

impl<F> TraceSink for F
where
    F: FnMut(&IterationRecord),
{
    fn record(&mut self, record: &IterationRecord) {
        self(record)
    }
}

impl TraceSink for () {
    fn record(&mut self, _record: &IterationRecord) {}
}

impl TraceSink for Vec<IterationRecord> {
    fn record(&mut self, record: &IterationRecord) {
        self.push(*record);
    }
}

/// Forwards each record to `log::info!` under [`TRACE_TARGET`].
///
/// Nothing is printed unless the caller installs a logger. Runs on
/// different threads share that logger, so their lines interleave in
/// whatever order it receives them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&mut self, record: &IterationRecord) {
        info!(target: TRACE_TARGET, "{} {}", record.algorithm(), record);
    }
}

/// Builds and delivers a record only when tracing is on.
#[inline]
pub(crate) fn emit<S, R>(cfg: &SolverCfg, sink: &mut S, make: R)
where
    S: TraceSink + ?Sized,
    R: FnOnce() -> IterationRecord,
{
    if cfg.verbose() {
        sink.record(&make());
    }
}
