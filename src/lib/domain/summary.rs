//! Aggregated statistics over a batch of measurements

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::invocation::{InvocationResult, Measurement};

/// Aggregates the [`InvocationResult`]s of a run. The counters are derived from
/// the stored results, so they can't drift apart from them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    results: Vec<InvocationResult>,
    skipped: Vec<PathBuf>,
}

impl RunSummary {
    /// Stores a new [`Measurement`]. Targets that weren't found are kept apart,
    /// and they don't take part in any of the tallies
    pub fn record(&mut self, measurement: Measurement) {
        match measurement {
            Measurement::Attempted(result) => self.results.push(result),
            Measurement::NotFound(target) => self.skipped.push(target),
        }
    }

    pub fn results(&self) -> &[InvocationResult] {
        &self.results
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.skipped.iter().map(PathBuf::as_path)
    }

    /// Every target handed to the run, attempted or not
    pub fn requested(&self) -> usize {
        self.results.len() + self.skipped.len()
    }

    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.successful()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.results.iter().map(InvocationResult::elapsed).sum()
    }

    /// Average seconds per attempted target. Zero when nothing was attempted
    pub fn average_secs(&self) -> f64 {
        match self.attempted() {
            0 => 0.0,
            attempted => self.total_elapsed().as_secs_f64() / attempted as f64,
        }
    }
}

impl FromIterator<Measurement> for RunSummary {
    fn from_iter<T: IntoIterator<Item = Measurement>>(iter: T) -> Self {
        let mut summary = RunSummary::default();
        iter.into_iter().for_each(|m| summary.record(m));
        summary
    }
}
