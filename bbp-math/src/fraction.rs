/// Fractional accumulator kept modulo 1.
///
/// Invariant: after every [`Fraction::add`] the value lies in `[0, 1)` for
/// non-negative terms (up to floating rounding). This keeps magnitude from
/// growing across millions of summed terms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fraction(f64);

impl Fraction {
    pub const ZERO: Fraction = Fraction(0.0);

    /// Wrap a value, dropping its integer part
    pub fn new(value: f64) -> Self {
        Self(value.fract())
    }

    /// Add one term and drop the integer part
    #[inline]
    pub fn add(&mut self, term: f64) {
        let s = self.0 + term;
        self.0 = s - s.trunc();
    }

    /// Fold another accumulator (a partial result) into this one
    #[inline]
    pub fn fold(&mut self, other: Fraction) {
        self.add(other.0);
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Map any finite real onto `[0, 1)`.
    ///
    /// Negative combinations wrap around (`-0.25 -> 0.75`). A result that
    /// rounds to exactly 1.0 is mapped to 0.0.
    pub fn normalize(raw: f64) -> f64 {
        let wrapped = raw.rem_euclid(1.0);
        if wrapped >= 1.0 {
            0.0
        } else {
            wrapped
        }
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> f64 {
        f.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_drops_integer_part() {
        let mut acc = Fraction::ZERO;
        acc.add(0.75);
        acc.add(0.5);
        assert!((acc.value() - 0.25).abs() < 1e-15);
        acc.add(3.0);
        assert!((acc.value() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_stays_bounded_over_many_terms() {
        let mut acc = Fraction::ZERO;
        for i in 0..100_000 {
            acc.add(0.999 + (i % 7) as f64);
            assert!(acc.value() >= 0.0 && acc.value() < 1.0);
        }
    }

    #[test]
    fn test_normalize_wraps_negative() {
        assert!((Fraction::normalize(-0.25) - 0.75).abs() < 1e-15);
        assert!((Fraction::normalize(2.125) - 0.125).abs() < 1e-15);
        assert_eq!(Fraction::normalize(-1e-300), 0.0);
    }
}
