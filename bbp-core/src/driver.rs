//! Series Summation Driver.
//!
//! For one series `S_j` this computes `16^d · S_j mod 1` in two phases:
//!
//! - **Left phase** (`k < d`): exponents `d - k` are positive and huge, so
//!   terms use `16^(d-k) mod (8k+j)`. The range is split by a [`ChunkPlan`]
//!   into batches dispatched through an [`Executor`]; the leftover tail runs
//!   on the calling thread.
//! - **Right phase** (`k >= d`): exponents are non-positive, so terms are
//!   plain floats shrinking by 16 each step, summed until negligible.
//!
//! Partial results are folded in dispatch order (ascending `k`). Every
//! executor therefore yields bit-identical sums for the same plan; different
//! plans agree up to floating rounding.

use crate::worker::{add_terms, sum_chunk};
use crate::{BbpError, CancelToken, ChunkPlan, DigitPosition, DriverConfig, Executor, Series, TailBound, WorkChunk};
use bbp_math::{Fraction, PowerTable};

/// Result of one series summation plus the work it took
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSum {
    pub series: Series,
    /// `16^d · S_j mod 1`
    pub value: f64,
    /// Left-phase batches dispatched to the executor
    pub batches: u64,
    /// Left-phase terms summed sequentially after the last batch
    pub tail_terms: u64,
    /// Right-phase terms added before the early exit
    pub right_terms: u32,
}

pub struct SeriesDriver<'e> {
    executor: &'e dyn Executor,
    config: DriverConfig,
    cancel: Option<CancelToken>,
}

impl<'e> SeriesDriver<'e> {
    pub fn new(executor: &'e dyn Executor, config: DriverConfig) -> Self {
        Self {
            executor,
            config,
            cancel: None,
        }
    }

    /// Stop dispatching new batches once `token` is cancelled
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn executor(&self) -> &'e dyn Executor {
        self.executor
    }

    /// Compute `16^d · S_j mod 1`.
    ///
    /// `table` must be sized for at least `position`; it is shared read-only
    /// by every chunk.
    pub fn series_sum(
        &self,
        series: Series,
        position: DigitPosition,
        table: &PowerTable,
    ) -> Result<SeriesSum, BbpError> {
        self.config.validate()?;
        let d = position.get();
        if table.max_exponent() < d {
            return Err(BbpError::InvalidArgument(format!(
                "power table sized for exponent {} cannot serve position {}",
                table.max_exponent(),
                d
            )));
        }

        let plan = ChunkPlan::new(series, d, self.config.chunk_size, self.executor.lanes());
        let job = |chunk: &WorkChunk| sum_chunk(chunk, table);
        let mut s = Fraction::ZERO;

        // Left phase, parallel part
        for (index, batch) in plan.batches().enumerate() {
            if self.is_cancelled() {
                log::debug!("{} cancelled before batch {}", series, index);
                return Err(BbpError::Cancelled {
                    completed_batches: index as u64,
                });
            }
            let partials = self.executor.run_batch(&batch, &job)?;
            if partials.len() != batch.len() {
                return Err(BbpError::Executor(format!(
                    "{} returned {} results for {} chunks",
                    self.executor.name(),
                    partials.len(),
                    batch.len()
                )));
            }
            for partial in partials {
                s.fold(Fraction::new(partial));
            }
            log::trace!(
                "{} batch {}/{} folded ({} lanes x {} terms)",
                series,
                index + 1,
                plan.batch_count(),
                plan.lanes(),
                plan.chunk_size()
            );
        }

        // Left phase, sequential remainder
        let tail = plan.tail();
        add_terms(&mut s, &tail, table)?;

        // Right phase
        let right_terms = add_right_tail(&mut s, series, d, &self.config.tail);

        log::debug!(
            "{} at d={}: {} batches via {}, {} tail terms, {} right terms",
            series,
            d,
            plan.batch_count(),
            self.executor.name(),
            tail.len,
            right_terms
        );

        Ok(SeriesSum {
            series,
            value: s.value(),
            batches: plan.batch_count(),
            tail_terms: tail.len,
            right_terms,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|token| token.is_cancelled())
    }
}

/// Add right-phase terms `16^(d-k) / (8k+j)` for `k = d ..= d + max_terms`.
///
/// Terms decrease strictly, so the loop stops at the first one below
/// `bound.epsilon`. Returns the number of terms added (at most 101).
pub fn add_right_tail(acc: &mut Fraction, series: Series, d: u64, bound: &TailBound) -> u32 {
    let mut added = 0;
    for i in 0..=bound.max_terms {
        let k = d + i as u64;
        let term = 16f64.powi(-(i as i32)) / series.denominator(k) as f64;
        if term < bound.epsilon {
            break;
        }
        acc.add(term);
        added += 1;
    }
    added
}
