//! Rayon-based parallel executor.

use crate::traits::{Executor, ExecutorError};
use rayon::prelude::*;
use std::sync::Arc;

/// A parallel executor on rayon's work-stealing pool.
///
/// [`RayonExecutor::new`] uses the global pool. [`RayonExecutor::with_threads`]
/// builds a dedicated pool so a batch can be capped without touching global
/// state.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    pool: Option<Arc<rayon::ThreadPool>>,
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            pool: None,
            num_threads: rayon::current_num_threads(),
        }
    }

    pub fn with_threads(num_threads: usize) -> Result<Self, ExecutorError> {
        if num_threads == 0 {
            return Err(ExecutorError::new("thread count must be at least 1"));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("millwork-worker-{i}"))
            .build()
            .map_err(|e| ExecutorError::new(e.to_string()))?;
        log::debug!("Built dedicated rayon pool with {num_threads} threads");

        Ok(Self {
            pool: Some(Arc::new(pool)),
            num_threads,
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
        match &self.pool {
            Some(pool) => pool.install(|| items.into_par_iter().map(f).collect()),
            None => items.into_par_iter().map(f).collect(),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.execute_all(items, f)
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_rayon_executor_keeps_input_order() {
        let executor = RayonExecutor::new();
        let items: Vec<usize> = (0..500).collect();
        let results = executor.execute_all(items, |x| x * 2);
        assert_eq!(results, (0..500).map(|x| x * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_rayon_executor_handles_fallible_operations() {
        let executor = RayonExecutor::new();
        let results: Vec<Result<i32, &str>> =
            executor.execute_all_fallible(vec![1, 2, 0, 4], |x| {
                if x == 0 { Err("zero width") } else { Ok(36 / x) }
            });
        assert_eq!(results, vec![Ok(36), Ok(18), Err("zero width"), Ok(9)]);
    }

    #[test]
    fn test_dedicated_pool_runs_every_item() {
        let executor = RayonExecutor::with_threads(3).expect("pool");
        assert_eq!(executor.parallelism(), 3);

        let counter = Arc::new(AtomicUsize::new(0));
        let _ = executor.execute_all((0..100).collect::<Vec<usize>>(), {
            let counter = counter.clone();
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn test_zero_threads_is_rejected() {
        assert!(RayonExecutor::with_threads(0).is_err());
    }
}
