use anyhow::{Context, Result};
use bbp_core::{DigitPosition, DriverConfig, Executor, DEFAULT_HEX_DIGITS};
use bbp_cpu::{available_lanes, physical_cores, ExecutionMode, UnifiedExecutor};
use bbp_math::to_binary_digits;
use clap::{Parser, ValueEnum};
use mini_bbp::compute_digit_with;
use std::time::Instant;

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Mode {
    Sequential,
    Threads,
    Bulk,
}

/// Compute hexadecimal digits of π at one position with the BBP formula
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Digit position d; output starts at hex digit d + 1 of π
    #[arg(long, default_value_t = 10_000_000, allow_negative_numbers = true)]
    position: i64,

    /// Execution substrate for the left-phase batches
    #[arg(long, value_enum, default_value_t = Mode::Threads)]
    mode: Mode,

    /// Lanes per batch (threads: default all logical CPUs; bulk: default 700)
    #[arg(long)]
    lanes: Option<usize>,

    /// Terms per chunk (default depends on mode)
    #[arg(long)]
    chunk_size: Option<u64>,

    /// Hex digits to print
    #[arg(long, default_value_t = DEFAULT_HEX_DIGITS)]
    digits: usize,

    /// Also print the binary expansion (4 bits per hex digit)
    #[arg(long)]
    binary: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let position = DigitPosition::try_from(args.position).context("invalid --position")?;
    let mode = match args.mode {
        Mode::Sequential => ExecutionMode::Sequential,
        Mode::Threads => ExecutionMode::Threads { lanes: args.lanes },
        Mode::Bulk => match args.lanes {
            Some(lanes) => ExecutionMode::Bulk { lanes, threads: None },
            None => ExecutionMode::bulk(),
        },
    };
    let mut config: DriverConfig = mode.driver_config();
    if let Some(chunk_size) = args.chunk_size {
        config = config.with_chunk_size(chunk_size);
    }
    let executor = UnifiedExecutor::new(mode).context("create executor")?;

    if !args.json {
        println!("Bailey–Borwein–Plouffe Formula for Pi");
        println!("Build: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        println!(
            "Detected ({}) Threads on CPU ({} physical cores)",
            available_lanes(),
            physical_cores()
        );
        println!(
            "Mode: {}, {} terms per chunk\n",
            mode.description(),
            config.chunk_size
        );
    }

    let start = Instant::now();
    let report = compute_digit_with(position.get(), &executor, &config, args.digits)
        .with_context(|| format!("extract digit at position {}", position))?;
    let elapsed = start.elapsed();
    log::info!("{} lanes on {} took {:.3}s", executor.lanes(), executor.name(), elapsed.as_secs_f64());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Position: {}", report.position);
    println!("Pi Estimation Decimal: {:.17}", report.decimal_fraction);
    println!("Pi Estimation Hex: {}", report.hex_digits);
    if args.binary {
        let bits = to_binary_digits(report.decimal_fraction, args.digits * 4)?;
        println!("Pi Estimation Binary: {}", bits);
    }
    println!("Elapsed: {:.3}s", elapsed.as_secs_f64());
    Ok(())
}
