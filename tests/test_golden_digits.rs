// Golden digits of π at known positions.
// Reference: the first 144 hex digits of π's fraction (the Blowfish P-array
// initialisation constants).
use bbp_core::{FixedLanes, SequentialExecutor};
use mini_bbp::{compute_digit, compute_digit_with, DriverConfig};

const PI_HEX: &str = "243f6a8885a308d313198a2e03707344a4093822299f31d0\
                      082efa98ec4e6c89452821e638d01377be5466cf34e90c6c\
                      c0ac29b7c97c50dd3f84d5b5b54709179216d5d98979fb1b";

/// Every window below is followed by digits far from a carry boundary, so
/// truncating an f64 result reproduces it exactly.
const POSITIONS: [u64; 8] = [0, 1, 8, 16, 40, 64, 100, 128];

#[test]
fn test_reference_string_length() {
    assert_eq!(PI_HEX.len(), 144);
}

#[test]
fn test_position_zero_matches_pi() {
    let report = compute_digit_with(0, &SequentialExecutor, &DriverConfig::default(), 13).unwrap();
    assert_eq!(&report.hex_digits[..10], &PI_HEX[..10]);
    assert_eq!(report.hex_digits.len(), 13);
    assert!((report.decimal_fraction - (std::f64::consts::PI - 3.0)).abs() < 1e-14);
}

#[test]
fn test_known_windows_sequential() {
    for &d in &POSITIONS {
        let report = compute_digit_with(d, &SequentialExecutor, &DriverConfig::default(), 8).unwrap();
        let start = d as usize;
        assert_eq!(report.hex_digits, &PI_HEX[start..start + 8], "position {}", d);
    }
}

#[test]
fn test_known_windows_with_batches() {
    // Small chunks and several lanes so every window goes through batches
    let executor = FixedLanes::new(5);
    let config = DriverConfig::default().with_chunk_size(3);
    for &d in &POSITIONS {
        let report = compute_digit_with(d, &executor, &config, 8).unwrap();
        let start = d as usize;
        assert_eq!(report.hex_digits, &PI_HEX[start..start + 8], "position {}", d);
    }
}

#[test]
fn test_default_entry_point() {
    let report = compute_digit(16).unwrap();
    assert_eq!(&report.hex_digits[..8], "13198a2e");
    assert_eq!(report.substrate, "threads");
    assert!(report.lanes >= 1);
}

#[test]
#[ignore = "slow in debug builds; run with --release -- --ignored"]
fn test_position_one_million_published_digits() {
    // Bailey, Borwein & Plouffe (1997): hex digits starting at position 10^6
    let report = compute_digit(999_999).unwrap();
    assert_eq!(&report.hex_digits[..8], "26c65e52");
}

#[test]
fn test_report_serializes_to_json() {
    let report = compute_digit_with(40, &SequentialExecutor, &DriverConfig::default(), 8).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["position"], 40);
    assert_eq!(json["hex_digits"], &PI_HEX[40..48]);
    assert_eq!(json["substrate"], "sequential");
}
