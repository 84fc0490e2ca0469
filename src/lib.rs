//! # mini-bbp
//!
//! Hexadecimal digits of π at an arbitrary position via the
//! Bailey–Borwein–Plouffe formula, without computing earlier digits.
//!
//! ```no_run
//! let report = mini_bbp::compute_digit(1_000_000).unwrap();
//! println!("{} {}", report.decimal_fraction, report.hex_digits);
//! ```
//!
//! Workspace crates:
//! - `bbp-math`: modular exponentiation, fractional accumulator, radix expansion
//! - `bbp-core`: work chunks, executor trait, series driver, digit assembler
//! - `bbp-cpu`: thread and bulk-launch executors

pub use bbp_core::{
    BbpError, CancelToken, DigitPosition, DriverConfig, Executor, SequentialExecutor,
    DEFAULT_HEX_DIGITS,
};
pub use bbp_cpu::{available_lanes, ExecutionMode, UnifiedExecutor};

use bbp_core::DigitExtractor;
use bbp_math::to_hex_digits;
use serde::{Deserialize, Serialize};

/// Outcome of one digit extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitReport {
    pub position: u64,
    /// `16^d · π mod 1`
    pub decimal_fraction: f64,
    /// Hex digits `d + 1 ..` of π
    pub hex_digits: String,
    /// Lanes per batch used by the executor
    pub lanes: usize,
    /// Executor name
    pub substrate: String,
}

/// Extract the digits at `position` using OS threads on every logical CPU
pub fn compute_digit(position: u64) -> Result<DigitReport, BbpError> {
    let mode = ExecutionMode::default();
    let executor = UnifiedExecutor::new(mode)?;
    compute_digit_with(position, &executor, &mode.driver_config(), DEFAULT_HEX_DIGITS)
}

/// Extract with an explicit executor, driver profile and hex length
pub fn compute_digit_with(
    position: u64,
    executor: &dyn Executor,
    config: &DriverConfig,
    hex_len: usize,
) -> Result<DigitReport, BbpError> {
    compute_digit_cancellable(position, executor, config, hex_len, None)
}

/// As [`compute_digit_with`], stopping at the next batch boundary once
/// `cancel` fires
pub fn compute_digit_cancellable(
    position: u64,
    executor: &dyn Executor,
    config: &DriverConfig,
    hex_len: usize,
    cancel: Option<CancelToken>,
) -> Result<DigitReport, BbpError> {
    let position = DigitPosition::new(position)?;
    let mut extractor = DigitExtractor::new(executor, *config);
    if let Some(token) = cancel {
        extractor = extractor.with_cancel(token);
    }
    let extraction = extractor.extract(position)?;
    let hex_digits = to_hex_digits(extraction.fraction, hex_len)?;

    Ok(DigitReport {
        position: position.get(),
        decimal_fraction: extraction.fraction,
        hex_digits,
        lanes: executor.lanes(),
        substrate: executor.name().to_string(),
    })
}
