//! Rayon-based parallel executor.
//!
//! Breaking is CPU-bound and each sequence is independent, which makes a
//! work-stealing pool a natural fit for large batches.

use kbreak_traits::{Executor, ExecutorError};
use rayon::prelude::*;
use std::sync::Arc;

/// A parallel executor using rayon's work-stealing thread pool.
///
/// [`RayonExecutor::new`] uses rayon's global pool, which defaults to one
/// thread per CPU core. [`RayonExecutor::with_threads`] builds a dedicated pool
/// instead, leaving the global pool untouched.
///
/// # Example
///
/// ```ignore
/// use kbreak_executor::RayonExecutor;
/// use kbreak_traits::Executor;
///
/// let executor = RayonExecutor::with_threads(4)?;
/// let results = executor.execute_all(vec![1, 2, 3], |x| x * 2);
/// assert_eq!(results, vec![2, 4, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Dedicated pool, or `None` for rayon's global pool.
    pool: Option<Arc<rayon::ThreadPool>>,
    num_threads: usize,
}

impl RayonExecutor {
    /// Creates a new RayonExecutor using rayon's global thread pool.
    pub fn new() -> Self {
        Self {
            pool: None,
            num_threads: rayon::current_num_threads(),
        }
    }

    /// Creates an executor backed by its own pool of `num_threads` threads.
    pub fn with_threads(num_threads: usize) -> Result<Self, ExecutorError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("kbreak-worker-{i}"))
            .build()
            .map_err(|e| ExecutorError::PoolBuild(e.to_string()))?;
        Ok(Self {
            num_threads: pool.current_num_threads(),
            pool: Some(Arc::new(pool)),
        })
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        // Indexed collect keeps the input order.
        match &self.pool {
            Some(pool) => pool.install(|| items.into_par_iter().map(f).collect()),
            None => items.into_par_iter().map(f).collect(),
        }
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}
