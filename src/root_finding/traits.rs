use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::report::RootFindingReport;
use super::trace::{LogSink, TraceSink};

/// An iterative scalar root refiner.
///
/// Implementors hold their own starting data (bracket, seed points,
/// derivative) and keep their iteration state private; the trait only
/// fixes how a run is started and what comes back.
pub trait RootFinder {
    fn algorithm(&self) -> Algorithm;

    /// runs the solver, handing trace records to `sink` when `cfg.verbose()`
    fn find_root_traced<F, S>(&mut self, func: F, cfg: &SolverCfg, sink: &mut S) -> RootFindingReport
    where
        F: FnMut(f64) -> f64,
        S: TraceSink + ?Sized;

    /// runs the solver, tracing to [`LogSink`] when `cfg.verbose()`
    #[inline]
    fn find_root<F>(&mut self, func: F, cfg: &SolverCfg) -> RootFindingReport
    where
        F: FnMut(f64) -> f64,
    {
        self.find_root_traced(func, cfg, &mut LogSink)
    }
}
