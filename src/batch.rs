//! Breaking many independent sequences at once.

use crate::config::BreakingConfig;
use crate::error::BreakError;
use kbreak_executor::ExecutorImpl;
use kbreak_layout::{BreakPositions, BreakingAlgorithm, ScanStatistics};
use kbreak_traits::Executor;
use kbreak_types::ElementSequence;
use std::time::{Duration, Instant};

/// Aggregate outcome of a batch, as logged after every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub sequences: usize,
    pub lines: usize,
    /// Sequences without a feasible breaking.
    pub infeasible: usize,
    /// Sequences rejected as invalid.
    pub failed: usize,
    pub statistics: ScanStatistics,
}

impl BatchSummary {
    pub fn from_results(results: &[Result<BreakPositions, BreakError>]) -> Self {
        let mut summary = Self {
            sequences: results.len(),
            ..Default::default()
        };
        for result in results {
            match result {
                Ok(positions) => {
                    summary.lines += positions.line_count();
                    if positions.is_empty() {
                        summary.infeasible += 1;
                    }
                    summary.statistics.merge(positions.statistics());
                }
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}

/// Breaks sequences with one configuration, spreading them over an executor.
/// Results keep the order of the input.
#[derive(Debug, Clone)]
pub struct BatchBreaker {
    config: BreakingConfig,
    executor: ExecutorImpl,
}

impl BatchBreaker {
    /// Uses the default executor: rayon's pool when the `rayon-executor`
    /// feature is on, the calling thread otherwise.
    pub fn new(config: BreakingConfig) -> Result<Self, BreakError> {
        config.validate()?;
        Ok(Self {
            config,
            executor: ExecutorImpl::default(),
        })
    }

    /// Breaks at most `num_threads` sequences at once, on a dedicated pool
    /// when more than one thread is asked for.
    pub fn with_threads(config: BreakingConfig, num_threads: usize) -> Result<Self, BreakError> {
        let executor = ExecutorImpl::with_threads(num_threads)?;
        Ok(Self::new(config)?.with_executor(executor))
    }

    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = executor;
        self
    }

    pub fn config(&self) -> &BreakingConfig {
        &self.config
    }

    pub fn executor(&self) -> &ExecutorImpl {
        &self.executor
    }

    pub fn break_all<P>(
        &self,
        sequences: Vec<ElementSequence<P>>,
    ) -> Vec<Result<BreakPositions, BreakError>>
    where
        P: Send + Sync + 'static,
    {
        let start = Instant::now();
        let algorithm = BreakingAlgorithm::new(self.config.parameters());
        let (line_width, threshold) = (self.config.line_width, self.config.threshold);
        let (force, allow_flagged) = (self.config.force, self.config.allow_flagged);

        let job = move |sequence: ElementSequence<P>| -> Result<BreakPositions, BreakError> {
            sequence.validate()?;
            Ok(algorithm.find_breaking_points(
                &sequence,
                line_width,
                threshold,
                force,
                allow_flagged,
            ))
        };
        let results = self.executor.execute_all_fallible(sequences, job);

        log_summary(&BatchSummary::from_results(&results), self.executor.name(), start.elapsed());
        results
    }
}

fn log_summary(summary: &BatchSummary, executor: &str, elapsed: Duration) {
    log::info!(
        "Broke {} sequences into {} lines ({} infeasible, {} invalid) on {} in {:.2?}",
        summary.sequences,
        summary.lines,
        summary.infeasible,
        summary.failed,
        executor,
        elapsed
    );
    log::debug!("Scan statistics: {}", summary.statistics);
}
