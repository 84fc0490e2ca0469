use thiserror::Error;

/// Left-to-right binary exponentiation for `16^n mod k`.
///
/// Every intermediate is reduced before the next multiply, so the largest
/// product is `(k-1)^2`. Products stay in `u64` while `k <= 2^32` and widen
/// to `u128` above that.
const BASE: u64 = 16;
const NARROW_MODULUS_LIMIT: u64 = 1 << 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Modulus must be positive")]
    ZeroModulus,
    #[error("Exponent {exponent} exceeds power table maximum {max}")]
    ExponentOutOfRange { exponent: u64, max: u64 },
    #[error("Unsupported radix: {0} (expected 2..=16)")]
    InvalidRadix(u32),
    #[error("Value is not finite")]
    NonFinite,
}

/// Ascending powers of two, `1, 2, 4, ...`, up to the largest power that is
/// `<= max_exponent`.
///
/// Built once from the largest exponent a run will query and then shared
/// read-only, so lookups never depend on call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerTable {
    powers: Vec<u64>,
    max_exponent: u64,
}

impl PowerTable {
    /// Build a table able to serve every exponent in `0..=max_exponent`.
    pub fn for_exponent(max_exponent: u64) -> Self {
        let mut powers = vec![1u64];
        loop {
            let last = powers[powers.len() - 1];
            match last.checked_mul(2) {
                Some(next) if next <= max_exponent => powers.push(next),
                _ => break,
            }
        }
        Self {
            powers,
            max_exponent,
        }
    }

    /// Largest exponent this table was sized for
    pub fn max_exponent(&self) -> u64 {
        self.max_exponent
    }

    /// Number of tabulated powers (bit length of `max_exponent`, at least 1)
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// Compute `16^exponent mod modulus`, result in `[0, modulus)`.
    pub fn mod_pow16(&self, exponent: u64, modulus: u64) -> Result<u64, MathError> {
        if modulus == 0 {
            return Err(MathError::ZeroModulus);
        }
        if exponent > self.max_exponent {
            return Err(MathError::ExponentOutOfRange {
                exponent,
                max: self.max_exponent,
            });
        }
        if modulus == 1 {
            return Ok(0);
        }
        if exponent == 0 {
            return Ok(1);
        }

        // exponent >= 1, so powers[0] == 1 always qualifies
        let top = self.powers.partition_point(|&p| p <= exponent) - 1;
        let mut t = self.powers[top];
        let mut n = exponent;
        let mut r = 1u64;

        for _ in 0..=top {
            if n >= t {
                r = mul_mod(r, BASE, modulus);
                n -= t;
            }
            t /= 2;
            if t >= 1 {
                r = mul_mod(r, r, modulus);
            }
        }
        Ok(r)
    }
}

/// `16^exponent mod modulus` with a table sized for this single exponent.
///
/// Convenient for one-off queries; hot loops should build one
/// [`PowerTable`] and reuse it.
pub fn mod_pow16(exponent: u64, modulus: u64) -> Result<u64, MathError> {
    PowerTable::for_exponent(exponent).mod_pow16(exponent, modulus)
}

#[inline]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    if modulus <= NARROW_MODULUS_LIMIT {
        // a, b < 2^32 here
        (a * b) % modulus
    } else {
        ((a as u128 * b as u128) % modulus as u128) as u64
    }
}
