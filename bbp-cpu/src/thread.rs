use crate::lanes::{available_lanes, resolve_lanes};
use bbp_core::{BbpError, ChunkJob, Executor, WorkChunk};
use std::thread;

/// One OS thread per chunk per batch.
///
/// Each batch spawns `lanes` scoped threads and joins all of them before
/// returning, so no thread outlives the batch that created it. Pair with
/// [`bbp_core::DriverConfig::threads`] so spawn cost is amortised over long
/// chunks.
#[derive(Debug, Clone, Copy)]
pub struct ThreadExecutor {
    lanes: usize,
}

impl Default for ThreadExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadExecutor {
    /// One lane per logical CPU thread
    pub fn new() -> Self {
        Self {
            lanes: available_lanes(),
        }
    }

    pub fn with_lanes(lanes: usize) -> Self {
        Self {
            lanes: resolve_lanes(lanes),
        }
    }
}

impl Executor for ThreadExecutor {
    fn lanes(&self) -> usize {
        self.lanes
    }

    fn name(&self) -> &'static str {
        "threads"
    }

    fn run_batch(&self, batch: &[WorkChunk], job: &ChunkJob<'_>) -> Result<Vec<f64>, BbpError> {
        thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|chunk| scope.spawn(move || job(chunk)))
                .collect();

            // Join every lane before inspecting results; order follows `batch`
            let joined: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();
            joined
                .into_iter()
                .map(|outcome| {
                    outcome.unwrap_or_else(|_| Err(BbpError::Executor("worker thread panicked".into())))
                })
                .collect()
        })
    }
}
