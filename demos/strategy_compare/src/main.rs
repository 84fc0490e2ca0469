use anyhow::{Context, Result};
use bbp_core::Executor;
use bbp_cpu::{available_lanes, ExecutionMode, UnifiedExecutor};
use clap::Parser;
use mini_bbp::{compute_digit_with, DigitReport};
use std::time::Instant;

/// Run one position through every execution substrate and compare
///
/// Scenario: the same arithmetic core behind three substrates
/// - Sequential: caller thread only
/// - Threads: one OS thread per chunk, 100,000-term chunks
/// - Bulk: 700-lane launches of 1,000-term chunks over a thread pool
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Digit position
    #[arg(long, default_value_t = 1_000_000)]
    position: u64,

    /// Hex digits to compare
    #[arg(long, default_value_t = 10)]
    digits: usize,

    /// Skip the sequential baseline (slow at large positions)
    #[arg(long)]
    skip_sequential: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    println!("=== Execution Substrate Comparison ===\n");
    println!("  Position: {}", args.position);
    println!("  Logical CPUs: {}\n", available_lanes());

    let mut modes = vec![ExecutionMode::Threads { lanes: None }, ExecutionMode::bulk()];
    if !args.skip_sequential {
        modes.insert(0, ExecutionMode::Sequential);
    }

    let mut results: Vec<(ExecutionMode, DigitReport, f64)> = Vec::with_capacity(modes.len());
    for mode in modes {
        let executor = UnifiedExecutor::new(mode).context("create executor")?;
        let config = mode.driver_config();

        let start = Instant::now();
        let report = compute_digit_with(args.position, &executor, &config, args.digits)
            .with_context(|| format!("run {}", mode.description()))?;
        let secs = start.elapsed().as_secs_f64();

        println!(
            "{:<36} {:>8.3}s  {}  ({} lanes, {} terms/chunk)",
            mode.description(),
            secs,
            report.hex_digits,
            executor.lanes(),
            config.chunk_size
        );
        results.push((mode, report, secs));
    }

    let mut max_diff = 0.0f64;
    for (i, (_, a, _)) in results.iter().enumerate() {
        for (_, b, _) in results.iter().skip(i + 1) {
            let diff = (a.decimal_fraction - b.decimal_fraction).abs();
            max_diff = max_diff.max(diff.min(1.0 - diff));
        }
    }
    let all_match = results.windows(2).all(|w| w[0].1.hex_digits == w[1].1.hex_digits);

    println!("--------------------------------------------------");
    println!("Max pairwise difference: {:.3e}", max_diff);
    println!("Hex digits agree: {}", if all_match { "yes" } else { "NO" });
    if let Some((fastest, _, secs)) = results
        .iter()
        .min_by(|a, b| a.2.total_cmp(&b.2))
    {
        println!("Fastest: {} ({:.3}s)", fastest.description(), secs);
    }
    Ok(())
}
