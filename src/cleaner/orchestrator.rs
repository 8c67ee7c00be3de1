//! Orchestrator for parallel cleaning operations.

use crate::cleaner::executor::Cleanup;
use crate::error::Result;
use rayon::prelude::*;
use std::path::PathBuf;

/// Fans cleanup actions out over a fixed-size worker pool.
pub struct Dispatcher {
    jobs: usize,
}

impl Dispatcher {
    /// Create a dispatcher with `jobs` workers. `0` sizes the pool to the
    /// host's available parallelism.
    pub fn new(jobs: usize) -> Self {
        Self { jobs }
    }

    /// Run `cleanup` once for every directory and wait for all of them.
    ///
    /// Nothing is collected from the individual runs. Only failing to start
    /// the pool itself is an error.
    pub fn run_all<C>(&self, dirs: Vec<PathBuf>, cleanup: &C) -> Result<()>
    where
        C: Cleanup + ?Sized,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("sweep-worker-{}", i))
            .build()?;

        tracing::info!(
            dirs = dirs.len(),
            workers = pool.current_num_threads(),
            "Dispatching cleanup"
        );

        pool.install(|| {
            dirs.par_iter()
                .with_max_len(1)
                .for_each(|dir| cleanup.clean(dir));
        });

        tracing::info!("All cleanup actions returned");
        Ok(())
    }
}
