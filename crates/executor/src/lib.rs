//! Runs independent breaking jobs, one per element sequence.
//!
//! A scan owns all of its state, so sequences never coordinate: the executor
//! only decides where each job runs and hands the results back in input order.
//! [`SyncExecutor`] runs every job on the calling thread, [`RayonExecutor`]
//! (feature `rayon`) spreads them over a work-stealing pool.
//!
//! ```ignore
//! use kbreak_executor::{Executor, ExecutorImpl};
//!
//! let executor = ExecutorImpl::with_threads(4)?;
//! let line_counts = executor.execute_all(sequences, |seq| break_one(&seq).line_count());
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use kbreak_traits::{Executor, ExecutorError, SyncExecutor};

/// The executor a batch breaker holds.
///
/// `Executor` has generic methods and cannot be a trait object, so the
/// concrete executors are dispatched through this enum.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    /// Every sequence on the calling thread.
    Sync(SyncExecutor),

    /// Sequences spread over rayon's global pool or a dedicated one.
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    pub fn sequential() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }

    /// Runs at most `num_threads` breaking jobs at once. Zero or one thread,
    /// or a build without the `rayon` feature, breaks sequentially.
    pub fn with_threads(num_threads: usize) -> Result<Self, ExecutorError> {
        match num_threads {
            0 | 1 => Ok(Self::sequential()),
            #[cfg(feature = "rayon")]
            n => Ok(ExecutorImpl::Rayon(RayonExecutor::with_threads(n)?)),
            #[cfg(not(feature = "rayon"))]
            _ => Ok(Self::sequential()),
        }
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

/// Rayon's global pool when the feature is on, the calling thread otherwise.
impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            Self::sequential()
        }
    }
}
