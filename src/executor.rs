//! Task execution port
//!
//! Growing a branch of the tree is an independent unit of work, so the
//! recursion can hand each branch to an executor instead of descending
//! inline. `submit` blocks until the task result is available; the executor
//! only decides *where* the task runs and must never change its outcome.
//!
//! An executor that imposes its own limits (a remote pool with timeouts, for
//! instance) reports them through the `Result`, which aborts training instead
//! of yielding a partial tree.

use crate::error::{Error, Result};

/// Runs zero-argument units of work on behalf of the tree growth recursion.
pub trait TaskExecutor: Sync {
    /// Execute `task` and block until its result is available.
    fn submit<T, F>(&self, task: F) -> Result<T>
    where
        T: Send,
        F: FnOnce() -> T + Send;
}

/// Runs every task on the calling thread. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl TaskExecutor for InlineExecutor {
    fn submit<T, F>(&self, task: F) -> Result<T>
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        Ok(task())
    }
}

/// Runs tasks on a rayon thread pool.
///
/// Nested submissions are fine: a task submitted from inside the pool runs
/// on the worker that is already blocked on it.
#[derive(Debug)]
pub struct ThreadPoolExecutor {
    pool: rayon::ThreadPool,
}

impl ThreadPoolExecutor {
    /// Build an executor with its own pool of `num_threads` workers.
    pub fn new(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| Error::Execution(e.to_string()))?;
        Ok(ThreadPoolExecutor { pool })
    }

    /// Wrap an existing pool.
    pub fn with_pool(pool: rayon::ThreadPool) -> Self {
        ThreadPoolExecutor { pool }
    }
}

impl TaskExecutor for ThreadPoolExecutor {
    fn submit<T, F>(&self, task: F) -> Result<T>
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        Ok(self.pool.install(task))
    }
}
