//! Executor trait for abstracting how independent breaking jobs are run.
//!
//! Every breaking invocation owns its scan state, so a batch of sequences can be
//! processed sequentially or spread over a thread pool without coordination.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for executor setup.
#[derive(Error, Debug, Clone)]
pub enum ExecutorError {
    #[error("Failed to build thread pool: {0}")]
    PoolBuild(String),
}

/// A strategy for running a batch of independent jobs.
///
/// Implementations must return results in the order of the input items,
/// whatever order the jobs actually ran in.
///
/// # Example
///
/// ```ignore
/// let executor = SyncExecutor::new();
/// let widths = executor.execute_all(vec![1, 2, 3], |x| x * 2);
/// assert_eq!(widths, vec![2, 4, 6]);
/// ```
pub trait Executor: Send + Sync + Debug {
    /// Runs `f` over every item and collects the results in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Like [`Executor::execute_all`] for jobs that can fail. A failing job does
    /// not stop the others.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.execute_all(items, f)
    }

    /// The number of jobs that may run at the same time.
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Runs every job on the calling thread, one after the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}
