use crate::{BbpError, WorkChunk};

/// Work applied to each chunk of a batch (the Series Term Worker, bound to a
/// shared power table).
pub type ChunkJob<'a> = dyn Fn(&WorkChunk) -> Result<f64, BbpError> + Sync + 'a;

/// Execution substrate for left-phase batches.
///
/// Contract: `run_batch` blocks until every chunk of the batch has finished
/// and returns one partial result per chunk, in the order of `batch`.
/// Chunks are independent, so implementations may run them in any order and
/// on any number of threads. The first chunk error fails the batch.
pub trait Executor: Send + Sync {
    /// Chunks the driver should place in one batch (0 is treated as 1)
    fn lanes(&self) -> usize;

    /// Short substrate name for reports
    fn name(&self) -> &'static str;

    fn run_batch(&self, batch: &[WorkChunk], job: &ChunkJob<'_>) -> Result<Vec<f64>, BbpError>;
}

/// Single-lane executor running every chunk on the calling thread
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SequentialExecutor {
    fn lanes(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sequential"
    }

    fn run_batch(&self, batch: &[WorkChunk], job: &ChunkJob<'_>) -> Result<Vec<f64>, BbpError> {
        batch.iter().map(job).collect()
    }
}

/// Executor that reports a fixed lane count but runs sequentially.
///
/// Lets callers reproduce any parallel plan (same batches, same fold order)
/// without threads.
#[derive(Debug, Clone, Copy)]
pub struct FixedLanes {
    lanes: usize,
}

impl FixedLanes {
    pub fn new(lanes: usize) -> Self {
        Self { lanes: lanes.max(1) }
    }
}

impl Executor for FixedLanes {
    fn lanes(&self) -> usize {
        self.lanes
    }

    fn name(&self) -> &'static str {
        "fixed-lanes"
    }

    fn run_batch(&self, batch: &[WorkChunk], job: &ChunkJob<'_>) -> Result<Vec<f64>, BbpError> {
        SequentialExecutor.run_batch(batch, job)
    }
}
