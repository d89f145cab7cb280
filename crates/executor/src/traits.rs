use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Executor error: {message}")]
pub struct ExecutorError {
    pub message: String,
}

impl ExecutorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Runs a batch of independent work items, potentially in parallel.
///
/// Results come back in the same order as the input items.
pub trait Executor: Send + Sync + Debug {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Like `execute_all`, for work that may fail. One failure never stops
    /// the other items.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// 1 for sequential executors, the worker count otherwise.
    fn parallelism(&self) -> usize;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Processes items one after another on the calling thread.
#[derive(Debug, Clone, Default)]
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

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_executor_processes_items_in_order() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(vec![36.0, 30.0, 42.0], |w: f64| w / 12.0);
        assert_eq!(results, vec![3.0, 2.5, 3.5]);
    }

    #[test]
    fn test_sync_executor_keeps_going_after_a_failure() {
        let executor = SyncExecutor::new();
        let results: Vec<Result<u32, String>> =
            executor.execute_all_fallible(vec!["R1", "", "R3"], |id: &'static str| {
                if id.is_empty() {
                    Err("empty room id".to_string())
                } else {
                    Ok(id.len() as u32)
                }
            });
        assert_eq!(results, vec![Ok(2), Err("empty room id".to_string()), Ok(2)]);
    }

    #[test]
    fn test_sync_executor_empty_input() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(Vec::<u8>::new(), |x| x);
        assert!(results.is_empty());
    }

    #[test]
    fn test_sync_executor_metadata() {
        let executor = SyncExecutor::new();
        assert_eq!(executor.parallelism(), 1);
        assert_eq!(executor.name(), "SyncExecutor");
    }

    #[test]
    fn test_executor_error_display() {
        let err = ExecutorError::new("pool failed");
        assert_eq!(err.to_string(), "Executor error: pool failed");
    }
}
