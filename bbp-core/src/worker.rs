use crate::{BbpError, WorkChunk};
use bbp_math::{Fraction, PowerTable};

/// Series Term Worker: fractional sum of `16^(d-k) / (8k+j)` over one chunk.
///
/// Numerators come from `16^(d-k) mod (8k+j)`, which keeps every term below 1
/// while preserving the fractional part of the sum. Pure and reentrant.
pub fn sum_chunk(chunk: &WorkChunk, table: &PowerTable) -> Result<f64, BbpError> {
    let mut s = Fraction::ZERO;
    add_terms(&mut s, chunk, table)?;
    Ok(s.value())
}

/// Add the chunk's terms one at a time into an existing accumulator.
///
/// The driver uses this directly for the sequential tail of the left phase.
pub fn add_terms(acc: &mut Fraction, chunk: &WorkChunk, table: &PowerTable) -> Result<(), BbpError> {
    let d = chunk.position;
    if chunk.start + chunk.len > d {
        return Err(BbpError::InvalidArgument(format!(
            "chunk [{}, {}) extends past left phase end {}",
            chunk.start,
            chunk.start + chunk.len,
            d
        )));
    }

    for k in chunk.range() {
        let denominator = chunk.series.denominator(k);
        let numerator = table.mod_pow16(d - k, denominator)?;
        acc.add(numerator as f64 / denominator as f64);
    }
    Ok(())
}
