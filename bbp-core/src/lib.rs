//! # bbp-core
//!
//! Work model and orchestration for BBP digit extraction.
//!
//! - [`Executor`]: pluggable substrate running one batch of independent
//!   [`WorkChunk`]s and returning their partial results
//! - [`ChunkPlan`]: partition of the left phase into batches plus a tail
//! - [`worker::sum_chunk`]: the per-chunk term sum (Series Term Worker)
//! - [`SeriesDriver`]: left phase through the executor, right phase inline
//! - [`DigitExtractor`]: combines the four series into `16^d · π mod 1`
//!
//! Substrates with real parallelism live in `bbp-cpu`; this crate ships
//! only [`SequentialExecutor`] and [`FixedLanes`].

pub mod assembler;
pub mod cancel;
pub mod chunk;
pub mod config;
pub mod driver;
pub mod error;
pub mod executor;
pub mod series;
pub mod worker;

pub use assembler::{extract_digit, DigitExtraction, DigitExtractor};
pub use cancel::CancelToken;
pub use chunk::{ChunkPlan, WorkChunk};
pub use config::{
    DigitPosition, DriverConfig, TailBound, BULK_CHUNK_SIZE, BULK_LANES, DEFAULT_HEX_DIGITS,
    MAX_POSITION, THREAD_CHUNK_SIZE,
};
pub use driver::{SeriesDriver, SeriesSum};
pub use error::BbpError;
pub use executor::{ChunkJob, Executor, FixedLanes, SequentialExecutor};
pub use series::Series;
