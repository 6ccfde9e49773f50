//! Hooks for watching the transform run.
//!
//! The transform calls [`StageObserver::on_stage`] once after the base case and once after
//! every doubling step, passing the time the stage took. Observers only watch: nothing they do
//! can change the result.
use std::fmt;
use std::time::Duration;

/// A stage of the transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reshaping the input and computing the small base-case DFTs.
    BaseCase,
    /// The `n`th doubling step (0-indexed).
    Doubling(usize),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::BaseCase => write!(f, "base case"),
            Stage::Doubling(step) => write!(f, "doubling step {step}"),
        }
    }
}

/// Receives per-stage timings.
pub trait StageObserver {
    /// Called when `stage` has finished. `rows` is the number of rows of the working matrix
    /// at that point.
    fn on_stage(&mut self, stage: Stage, rows: usize, elapsed: Duration);
}

impl<O: StageObserver + ?Sized> StageObserver for &mut O {
    fn on_stage(&mut self, stage: Stage, rows: usize, elapsed: Duration) {
        (**self).on_stage(stage, rows, elapsed)
    }
}

/// Observer that ignores every stage. Used when no observer is given.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopObserver;

impl StageObserver for NoopObserver {
    #[inline]
    fn on_stage(&mut self, _stage: Stage, _rows: usize, _elapsed: Duration) {}
}

/// Observer that reports each stage through the [`log`] facade at `debug` level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;

impl StageObserver for LogObserver {
    fn on_stage(&mut self, stage: Stage, rows: usize, elapsed: Duration) {
        log::debug!("{stage} done in {elapsed:?} ({rows} rows)");
    }
}

/// Observer that records every stage, in order.
#[derive(Debug, Default, Clone)]
pub struct StageTimings {
    /// Each finished stage with the time it took
    pub stages: Vec<(Stage, Duration)>,
}

impl StageTimings {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time across all recorded stages.
    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, elapsed)| *elapsed).sum()
    }
}

impl StageObserver for StageTimings {
    fn on_stage(&mut self, stage: Stage, _rows: usize, elapsed: Duration) {
        self.stages.push((stage, elapsed));
    }
}
