use bbp_math::MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BbpError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Math error: {0}")]
    Math(#[from] MathError),
    #[error("Cancelled after {completed_batches} batches")]
    Cancelled { completed_batches: u64 },
    #[error("Executor failure: {0}")]
    Executor(String),
}
