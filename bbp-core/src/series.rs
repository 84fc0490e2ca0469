use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four partial series of the BBP formula
///
/// `π = Σ 16^-k (4/(8k+1) − 2/(8k+4) − 1/(8k+5) − 1/(8k+6))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    S1,
    S4,
    S5,
    S6,
}

impl Series {
    /// All series in the order the assembler combines them
    pub const ALL: [Series; 4] = [Series::S1, Series::S4, Series::S5, Series::S6];

    /// Denominator offset `j` in `8k + j`
    pub const fn offset(self) -> u64 {
        match self {
            Series::S1 => 1,
            Series::S4 => 4,
            Series::S5 => 5,
            Series::S6 => 6,
        }
    }

    /// Rational coefficient applied by the assembler
    pub const fn coefficient(self) -> f64 {
        match self {
            Series::S1 => 4.0,
            Series::S4 => -2.0,
            Series::S5 => -1.0,
            Series::S6 => -1.0,
        }
    }

    /// Denominator `8k + j` for term `k`
    #[inline]
    pub const fn denominator(self, k: u64) -> u64 {
        8 * k + self.offset()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.offset())
    }
}
