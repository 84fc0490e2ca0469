//! # bbp-cpu
//!
//! CPU execution substrates for BBP digit extraction.
//!
//! Key types:
//! - [`ThreadExecutor`]: one scoped OS thread per chunk, one batch at a time
//! - [`BulkExecutor`]: wide fixed-size launches over a rayon pool
//! - [`UnifiedExecutor`]: runtime selection via [`ExecutionMode`]
//! - [`available_lanes`]: logical CPU count, the capability query

pub mod bulk;
pub mod lanes;
pub mod thread;
pub mod unified;

pub use bulk::BulkExecutor;
pub use lanes::{available_lanes, physical_cores};
pub use thread::ThreadExecutor;
pub use unified::{ExecutionMode, UnifiedExecutor};
