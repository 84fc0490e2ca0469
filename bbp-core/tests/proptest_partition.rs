use bbp_core::{
    extract_digit, ChunkPlan, DigitPosition, DriverConfig, FixedLanes, SequentialExecutor, Series,
    SeriesDriver,
};
use bbp_math::PowerTable;
use proptest::prelude::*;

fn fraction_distance(a: f64, b: f64) -> f64 {
    // Values live on the unit circle: 0.9999999999 and 0.0 are neighbours
    let diff = (a - b).abs();
    diff.min(1.0 - diff)
}

// Property 1: any chunk size / lane count matches the fully sequential split
proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_decomposition_does_not_change_series_sum(
        d in 0u64..3_000,
        chunk_size in 1u64..500,
        lanes in 1usize..16
    ) {
        let position = DigitPosition::new(d).unwrap();
        let table = PowerTable::for_exponent(d);

        let reference_config = DriverConfig::default().with_chunk_size(1);
        let reference_exec = FixedLanes::new(1);
        let reference = SeriesDriver::new(&reference_exec, reference_config);

        let exec = FixedLanes::new(lanes);
        let driver = SeriesDriver::new(&exec, DriverConfig::default().with_chunk_size(chunk_size));

        for series in Series::ALL {
            let a = reference.series_sum(series, position, &table).unwrap().value;
            let b = driver.series_sum(series, position, &table).unwrap().value;
            prop_assert!(
                fraction_distance(a, b) < 1e-9,
                "{} at d={} (chunk {}, lanes {}): {} vs {}",
                series, d, chunk_size, lanes, a, b
            );
        }
    }
}

// Property 2: the assembled fraction is decomposition-independent too
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_decomposition_does_not_change_digit(
        d in 0u64..2_000,
        chunk_size in 1u64..300,
        lanes in 1usize..12
    ) {
        let position = DigitPosition::new(d).unwrap();
        let baseline = extract_digit(position, &SequentialExecutor, &DriverConfig::default().with_chunk_size(1)).unwrap();
        let split = extract_digit(position, &FixedLanes::new(lanes), &DriverConfig::default().with_chunk_size(chunk_size)).unwrap();
        prop_assert!(fraction_distance(baseline, split) < 1e-9);
    }
}

// Property 3: batches plus tail partition [0, d) exactly
proptest! {
    #[test]
    fn prop_plan_covers_left_phase_once(
        d in 0u64..5_000,
        chunk_size in 0u64..64,
        lanes in 0usize..32
    ) {
        let plan = ChunkPlan::new(Series::S1, d, chunk_size, lanes);
        let mut next = 0u64;
        for batch in plan.batches() {
            prop_assert_eq!(batch.len(), plan.lanes());
            for chunk in batch {
                prop_assert_eq!(chunk.start, next);
                next += chunk.len;
            }
        }
        let tail = plan.tail();
        prop_assert_eq!(tail.start, next);
        prop_assert_eq!(tail.start + tail.len, d);
        prop_assert!(tail.len <= plan.stride());
    }
}
