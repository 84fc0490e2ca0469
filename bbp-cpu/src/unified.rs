use crate::{available_lanes, BulkExecutor, ThreadExecutor};
use bbp_core::{BbpError, ChunkJob, DriverConfig, Executor, SequentialExecutor, WorkChunk, BULK_LANES};
use serde::{Deserialize, Serialize};

/// Execution substrate selector
///
/// This enum allows runtime selection of how left-phase batches run:
/// - **Sequential**: caller thread only (reference / debugging)
/// - **Threads**: one OS thread per chunk, long chunks
/// - **Bulk**: wide launches of short chunks over a thread pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionMode {
    Sequential,

    Threads {
        /// Lanes per batch; `None` uses every logical CPU
        lanes: Option<usize>,
    },

    Bulk {
        /// Work items per launch
        lanes: usize,
        /// Pool threads; `None` uses every logical CPU
        threads: Option<usize>,
    },
}

impl Default for ExecutionMode {
    fn default() -> Self {
        ExecutionMode::Threads { lanes: None }
    }
}

impl ExecutionMode {
    /// Bulk launch with the default width
    pub fn bulk() -> Self {
        ExecutionMode::Bulk {
            lanes: BULK_LANES,
            threads: None,
        }
    }

    /// Driver profile tuned for this substrate
    pub fn driver_config(&self) -> DriverConfig {
        match self {
            ExecutionMode::Sequential | ExecutionMode::Threads { .. } => DriverConfig::threads(),
            ExecutionMode::Bulk { .. } => DriverConfig::bulk(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            ExecutionMode::Sequential => "Sequential (1 lane)".to_string(),
            ExecutionMode::Threads { lanes } => {
                format!("Threads ({} lanes)", lanes.unwrap_or_else(available_lanes))
            }
            ExecutionMode::Bulk { lanes, threads } => format!(
                "Bulk ({} lanes on {} threads)",
                lanes,
                threads.unwrap_or_else(available_lanes)
            ),
        }
    }
}

enum Backend {
    Sequential(SequentialExecutor),
    Threads(ThreadExecutor),
    Bulk(BulkExecutor),
}

/// Unified executor that dispatches to the substrate chosen by its mode
pub struct UnifiedExecutor {
    mode: ExecutionMode,
    backend: Backend,
}

impl UnifiedExecutor {
    pub fn new(mode: ExecutionMode) -> Result<Self, BbpError> {
        let backend = match mode {
            ExecutionMode::Sequential => Backend::Sequential(SequentialExecutor::new()),
            ExecutionMode::Threads { lanes } => Backend::Threads(match lanes {
                Some(lanes) => ThreadExecutor::with_lanes(lanes),
                None => ThreadExecutor::new(),
            }),
            ExecutionMode::Bulk { lanes, threads } => Backend::Bulk(BulkExecutor::with_lanes(
                lanes,
                threads.unwrap_or_else(available_lanes),
            )?),
        };
        Ok(Self { mode, backend })
    }

    pub fn mode(&self) -> &ExecutionMode {
        &self.mode
    }

    fn inner(&self) -> &dyn Executor {
        match &self.backend {
            Backend::Sequential(exec) => exec,
            Backend::Threads(exec) => exec,
            Backend::Bulk(exec) => exec,
        }
    }
}

impl Executor for UnifiedExecutor {
    fn lanes(&self) -> usize {
        self.inner().lanes()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn run_batch(&self, batch: &[WorkChunk], job: &ChunkJob<'_>) -> Result<Vec<f64>, BbpError> {
        self.inner().run_batch(batch, job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection() {
        let seq = UnifiedExecutor::new(ExecutionMode::Sequential).unwrap();
        assert_eq!(seq.name(), "sequential");
        assert_eq!(seq.lanes(), 1);

        let threads = UnifiedExecutor::new(ExecutionMode::Threads { lanes: Some(3) }).unwrap();
        assert_eq!(threads.name(), "threads");
        assert_eq!(threads.lanes(), 3);

        let bulk = UnifiedExecutor::new(ExecutionMode::Bulk { lanes: 32, threads: Some(2) }).unwrap();
        assert_eq!(bulk.name(), "bulk");
        assert_eq!(bulk.lanes(), 32);
    }

    #[test]
    fn test_profiles_follow_mode() {
        assert_eq!(ExecutionMode::default().driver_config(), DriverConfig::threads());
        assert_eq!(ExecutionMode::bulk().driver_config(), DriverConfig::bulk());
    }

    #[test]
    fn test_mode_from_json() {
        let mode: ExecutionMode =
            serde_json::from_str(r#"{"Bulk":{"lanes":700,"threads":null}}"#).unwrap();
        assert_eq!(mode, ExecutionMode::bulk());
        assert_eq!(
            ExecutionMode::Threads { lanes: Some(4) }.description(),
            "Threads (4 lanes)"
        );
    }
}
