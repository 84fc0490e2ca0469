use crate::lanes::available_lanes;
use bbp_core::{BbpError, ChunkJob, Executor, WorkChunk, BULK_LANES};
use rayon::prelude::*;
use rayon::ThreadPool;

/// Fixed-width launch of short chunks over a rayon pool.
///
/// Models a bulk kernel launch: each batch is `lanes` independent work items
/// (700 by default) executed by however many hardware threads the pool has,
/// with a single blocking join per launch. Pair with
/// [`bbp_core::DriverConfig::bulk`] (1,000 terms per lane).
pub struct BulkExecutor {
    pool: ThreadPool,
    lanes: usize,
}

impl BulkExecutor {
    /// Default launch width over a pool sized to the logical CPU count
    pub fn new() -> Result<Self, BbpError> {
        Self::with_lanes(BULK_LANES, available_lanes())
    }

    /// `lanes` work items per launch, executed by `threads` pool workers
    pub fn with_lanes(lanes: usize, threads: usize) -> Result<Self, BbpError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("bbp-lane-{}", i))
            .build()
            .map_err(|e| BbpError::Executor(format!("failed to build thread pool: {}", e)))?;
        log::debug!(
            "bulk executor: {} lanes per launch on {} pool threads",
            lanes.max(1),
            pool.current_num_threads()
        );
        Ok(Self {
            pool,
            lanes: lanes.max(1),
        })
    }

    pub fn pool_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for BulkExecutor {
    fn lanes(&self) -> usize {
        self.lanes
    }

    fn name(&self) -> &'static str {
        "bulk"
    }

    fn run_batch(&self, batch: &[WorkChunk], job: &ChunkJob<'_>) -> Result<Vec<f64>, BbpError> {
        // Indexed collect keeps results in `batch` order
        self.pool
            .install(|| batch.par_iter().map(|chunk| job(chunk)).collect())
    }
}
