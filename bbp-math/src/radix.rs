use crate::modpow::MathError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Expand a fraction into `count` digits of the given radix (2..=16).
///
/// Repeatedly multiplies by the radix and emits the integer part. There is
/// no rounding or carry: digits are truncated. The integer part of `x` is
/// discarded first, so `1.25` and `0.25` expand identically.
pub fn to_radix_digits(x: f64, radix: u32, count: usize) -> Result<String, MathError> {
    if !(2..=16).contains(&radix) {
        return Err(MathError::InvalidRadix(radix));
    }
    if !x.is_finite() {
        return Err(MathError::NonFinite);
    }

    let base = radix as f64;
    let mut frac = x.rem_euclid(1.0);
    let mut out = String::with_capacity(count);
    for _ in 0..count {
        frac *= base;
        // Clamp guards against frac rounding up to exactly 1.0
        let digit = (frac.trunc() as usize).min(radix as usize - 1);
        out.push(DIGITS[digit] as char);
        frac -= digit as f64;
    }
    Ok(out)
}

/// Hexadecimal expansion (`0-9a-f`)
pub fn to_hex_digits(x: f64, count: usize) -> Result<String, MathError> {
    to_radix_digits(x, 16, count)
}

/// Binary expansion; each hex digit of the same fraction expands to four bits
pub fn to_binary_digits(x: f64, count: usize) -> Result<String, MathError> {
    to_radix_digits(x, 2, count)
}
