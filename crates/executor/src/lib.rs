//! Executor implementations for millwork batch processing.
//!
//! Rooms are independent, so a batch is a plain fan-out: one task per room,
//! results collected in input order.
//!
//! ## Available Executors
//!
//! - [`SyncExecutor`]: Sequential execution
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)
//!
//! ## Usage
//!
//! ```ignore
//! use millwork_executor::{Executor, ExecutorImpl};
//!
//! let executor = ExecutorImpl::default();
//! let results = executor.execute_all(vec![1, 2, 3], |x| x * 2);
//! ```

mod traits;

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use traits::{Executor, ExecutorError, SyncExecutor};

/// A type-erased executor that wraps concrete executor implementations.
///
/// `Executor` has generic methods and cannot be a trait object, so this enum
/// holds the concrete types and delegates to them.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    /// Sequential executor (no parallelism)
    Sync(SyncExecutor),

    /// Rayon work-stealing thread pool executor
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// Sequential when `threads` is 1, otherwise parallel where available.
    /// `None` uses every core.
    pub fn with_threads(threads: Option<usize>) -> Result<Self, ExecutorError> {
        match threads {
            Some(1) => Ok(ExecutorImpl::Sync(SyncExecutor::new())),
            #[cfg(feature = "rayon")]
            Some(n) => Ok(ExecutorImpl::Rayon(RayonExecutor::with_threads(n)?)),
            #[cfg(not(feature = "rayon"))]
            Some(_) => Ok(ExecutorImpl::Sync(SyncExecutor::new())),
            None => Ok(ExecutorImpl::default()),
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

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_thread_request_is_sequential() {
        let executor = ExecutorImpl::with_threads(Some(1)).expect("executor");
        assert_eq!(executor.name(), "SyncExecutor");
        assert_eq!(executor.parallelism(), 1);
    }

    #[test]
    fn test_executor_impl_preserves_order() {
        let executor = ExecutorImpl::default();
        let results = executor.execute_all((0..64).collect(), |x: u32| x * 3);
        assert_eq!(results, (0..64).map(|x| x * 3).collect::<Vec<_>>());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_thread_count_request_builds_dedicated_pool() {
        let executor = ExecutorImpl::with_threads(Some(2)).expect("executor");
        assert_eq!(executor.name(), "RayonExecutor");
        assert_eq!(executor.parallelism(), 2);
    }
}
