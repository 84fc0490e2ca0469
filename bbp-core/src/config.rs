//! Driver configuration and the validated digit position.
//!
//! Two launch profiles mirror the two substrates the driver is tuned for:
//! OS threads (few lanes, long chunks so spawn overhead is amortised) and
//! bulk lanes (many lanes, short chunks, one wide launch per batch).

use crate::BbpError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted position: keeps `8k + 6` below 2^53 for every left and
/// right phase term, so each denominator is exact as `u64` and as `f64`.
pub const MAX_POSITION: u64 = 1 << 49;

/// Right-phase term cap (terms `k = d ..= d + 100`)
pub const DEFAULT_RIGHT_TERMS: u32 = 100;

/// Right-phase terms below this magnitude no longer change an `f64` fraction
pub const DEFAULT_TAIL_EPSILON: f64 = 1e-17;

/// Terms per chunk when each lane is an OS thread
pub const THREAD_CHUNK_SIZE: u64 = 100_000;

/// Terms per chunk when each lane is one item of a bulk launch
pub const BULK_CHUNK_SIZE: u64 = 1_000;

/// Launch width of the bulk profile
pub const BULK_LANES: usize = 700;

/// Hexadecimal digits reported per extraction (≈ 52 bits of an `f64`)
pub const DEFAULT_HEX_DIGITS: usize = 13;

/// Position of the digit to extract, in the `16^d · π` scaling.
///
/// The fraction of `16^d · π` starts with hex digit `d + 1` of π.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DigitPosition(u64);

impl DigitPosition {
    pub fn new(position: u64) -> Result<Self, BbpError> {
        if position > MAX_POSITION {
            return Err(BbpError::InvalidArgument(format!(
                "position {} exceeds maximum {}",
                position, MAX_POSITION
            )));
        }
        Ok(Self(position))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for DigitPosition {
    type Error = BbpError;

    fn try_from(position: i64) -> Result<Self, Self::Error> {
        if position < 0 {
            return Err(BbpError::InvalidArgument(format!(
                "position must be non-negative, got {}",
                position
            )));
        }
        Self::new(position as u64)
    }
}

impl TryFrom<u64> for DigitPosition {
    type Error = BbpError;

    fn try_from(position: u64) -> Result<Self, Self::Error> {
        Self::new(position)
    }
}

impl fmt::Display for DigitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Right-phase convergence bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TailBound {
    /// Terms after `k = d` to consider (at most 100)
    pub max_terms: u32,
    /// Early-exit threshold; 0.0 disables the early exit
    pub epsilon: f64,
}

impl Default for TailBound {
    fn default() -> Self {
        Self {
            max_terms: DEFAULT_RIGHT_TERMS,
            epsilon: DEFAULT_TAIL_EPSILON,
        }
    }
}

impl TailBound {
    /// Run every term up to `max_terms`, never exiting early
    pub fn exhaustive() -> Self {
        Self {
            epsilon: 0.0,
            ..Self::default()
        }
    }
}

/// Series Summation Driver settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Terms per work chunk
    pub chunk_size: u64,
    pub tail: TailBound,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::threads()
    }
}

impl DriverConfig {
    /// Profile for OS-thread lanes
    pub fn threads() -> Self {
        Self {
            chunk_size: THREAD_CHUNK_SIZE,
            tail: TailBound::default(),
        }
    }

    /// Profile for bulk-launch lanes
    pub fn bulk() -> Self {
        Self {
            chunk_size: BULK_CHUNK_SIZE,
            tail: TailBound::default(),
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_tail(mut self, tail: TailBound) -> Self {
        self.tail = tail;
        self
    }

    /// Reject settings that would divide by zero or break the 101-term bound
    pub fn validate(&self) -> Result<(), BbpError> {
        if self.chunk_size == 0 {
            return Err(BbpError::InvalidArgument("chunk_size must be at least 1".into()));
        }
        if self.tail.max_terms > DEFAULT_RIGHT_TERMS {
            return Err(BbpError::InvalidArgument(format!(
                "tail max_terms {} exceeds {}",
                self.tail.max_terms, DEFAULT_RIGHT_TERMS
            )));
        }
        if !self.tail.epsilon.is_finite() || self.tail.epsilon < 0.0 {
            return Err(BbpError::InvalidArgument(format!(
                "tail epsilon must be finite and non-negative, got {}",
                self.tail.epsilon
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;

    #[test]
    fn test_position_bounds() {
        assert_eq!(DigitPosition::new(0).unwrap().get(), 0);
        assert!(DigitPosition::new(MAX_POSITION).is_ok());
        assert!(matches!(
            DigitPosition::new(MAX_POSITION + 1),
            Err(BbpError::InvalidArgument(_))
        ));
        assert!(matches!(
            DigitPosition::try_from(-1i64),
            Err(BbpError::InvalidArgument(_))
        ));
        assert_eq!(DigitPosition::try_from(42i64).unwrap().get(), 42);
    }

    #[test]
    fn test_denominator_exact_in_f64() {
        let largest = Series::S5.denominator(MAX_POSITION + DEFAULT_RIGHT_TERMS as u64);
        assert!(largest < 1 << 53);
        assert_eq!(largest as f64 as u64, largest);
    }

    #[test]
    fn test_validate() {
        assert!(DriverConfig::threads().validate().is_ok());
        assert!(DriverConfig::bulk().validate().is_ok());
        assert!(DriverConfig::threads().with_chunk_size(0).validate().is_err());

        let too_long = TailBound { max_terms: 101, epsilon: 1e-17 };
        assert!(DriverConfig::threads().with_tail(too_long).validate().is_err());

        let negative = TailBound { max_terms: 10, epsilon: -1.0 };
        assert!(DriverConfig::threads().with_tail(negative).validate().is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = DriverConfig::bulk();
        let json = serde_json::to_string(&config).unwrap();
        let back: DriverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
