use crate::Series;
use std::ops::Range;

/// Contiguous run of left-phase terms `[start, start + len)` for one series.
///
/// Chunks never overlap and carry everything a worker needs, so any chunk
/// can run on any lane in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkChunk {
    pub start: u64,
    pub len: u64,
    pub series: Series,
    pub position: u64,
}

impl WorkChunk {
    pub fn range(&self) -> Range<u64> {
        self.start..self.start + self.len
    }
}

/// Partition of the left phase `[0, d)` into batches of `lanes` chunks.
///
/// A batch is dispatched only while `k + chunk_size * lanes < d`; the
/// remainder becomes a sequential tail. Batches followed by the tail cover
/// `[0, d)` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    series: Series,
    position: u64,
    chunk_size: u64,
    lanes: usize,
    stride: u64,
    full_batches: u64,
}

impl ChunkPlan {
    /// `chunk_size` and `lanes` of 0 are treated as 1
    pub fn new(series: Series, position: u64, chunk_size: u64, lanes: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        let lanes = lanes.max(1);
        let stride = chunk_size.saturating_mul(lanes as u64);
        // Largest b with b * stride + stride < position
        let full_batches = if position == 0 { 0 } else { (position - 1) / stride };
        Self {
            series,
            position,
            chunk_size,
            lanes,
            stride,
            full_batches,
        }
    }

    pub fn lanes(&self) -> usize {
        self.lanes
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Terms covered by one full batch
    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn batch_count(&self) -> u64 {
        self.full_batches
    }

    /// Chunks of batch `index`, in dispatch order
    pub fn batch(&self, index: u64) -> Vec<WorkChunk> {
        let base = index * self.stride;
        (0..self.lanes as u64)
            .map(|lane| WorkChunk {
                start: base + lane * self.chunk_size,
                len: self.chunk_size,
                series: self.series,
                position: self.position,
            })
            .collect()
    }

    pub fn batches(&self) -> impl Iterator<Item = Vec<WorkChunk>> + '_ {
        (0..self.full_batches).map(move |index| self.batch(index))
    }

    /// Terms left for the sequential tail
    pub fn tail(&self) -> WorkChunk {
        let start = self.full_batches * self.stride;
        WorkChunk {
            start,
            len: self.position - start,
            series: self.series,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(plan: &ChunkPlan) -> Vec<u64> {
        let mut ks: Vec<u64> = plan.batches().flatten().flat_map(|c| c.range()).collect();
        ks.extend(plan.tail().range());
        ks
    }

    #[test]
    fn test_exact_cover() {
        for position in [0u64, 1, 2, 9, 10, 11, 100, 257] {
            for (chunk_size, lanes) in [(1u64, 1usize), (1, 4), (3, 2), (5, 1), (7, 8)] {
                let plan = ChunkPlan::new(Series::S1, position, chunk_size, lanes);
                let expected: Vec<u64> = (0..position).collect();
                assert_eq!(covered(&plan), expected, "d={} c={} l={}", position, chunk_size, lanes);
            }
        }
    }

    #[test]
    fn test_strict_batch_boundary() {
        // d = 10, stride 5: [0,5) is a batch, [5,10) stays sequential
        let plan = ChunkPlan::new(Series::S4, 10, 5, 1);
        assert_eq!(plan.batch_count(), 1);
        assert_eq!(plan.tail().range(), 5..10);

        // d = 11, stride 5: 5 + 5 < 11, so two batches and a one-term tail
        let plan = ChunkPlan::new(Series::S4, 11, 5, 1);
        assert_eq!(plan.batch_count(), 2);
        assert_eq!(plan.tail().range(), 10..11);
    }

    #[test]
    fn test_degenerate_lanes_fall_back_to_one() {
        let plan = ChunkPlan::new(Series::S5, 50, 0, 0);
        assert_eq!(plan.lanes(), 1);
        assert_eq!(plan.chunk_size(), 1);
        assert_eq!(plan.batch_count(), 49);
        assert_eq!(plan.tail().range(), 49..50);
    }

    #[test]
    fn test_empty_left_phase() {
        let plan = ChunkPlan::new(Series::S6, 0, 100_000, 8);
        assert_eq!(plan.batch_count(), 0);
        assert!(plan.tail().range().is_empty());
    }

    #[test]
    fn test_batch_layout() {
        let plan = ChunkPlan::new(Series::S1, 100, 4, 3);
        let second = plan.batch(1);
        let starts: Vec<u64> = second.iter().map(|c| c.start).collect();
        assert_eq!(starts, vec![12, 16, 20]);
        assert!(second.iter().all(|c| c.len == 4 && c.position == 100));
    }
}
