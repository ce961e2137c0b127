//! Standalone benchmark runner for ratekit.

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use rk_bench::{BenchConfig, BenchResult, load_yaml, run_benchmark, synthetic_mechanism};
use rk_core::timing::kinetics_timing;
use rk_kinetics::load_mechanism;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rk-bench")]
#[command(about = "Rate-coefficient engine benchmark", long_about = None)]
struct Cli {
    /// Number of species in the synthetic mechanism (at least 2)
    #[arg(
        long,
        default_value_t = 20,
        value_parser = RangedU64ValueParser::<usize>::new().range(2..)
    )]
    species: usize,
    /// Number of reactions in the synthetic mechanism
    #[arg(long, default_value_t = 200)]
    reactions: usize,
    /// Update iterations to time
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,
    /// Load a YAML mechanism instead of generating one
    #[arg(long)]
    mechanism: Option<PathBuf>,
    /// Translational temperature [K]
    #[arg(long, default_value_t = 8000.0)]
    t: f64,
    /// Electron temperature [K]
    #[arg(long, default_value_t = 12_000.0)]
    te: f64,
    /// Vibrational temperature [K]
    #[arg(long, default_value_t = 6000.0)]
    tv: f64,
    /// Pressure [Pa]
    #[arg(long, default_value_t = 1000.0)]
    pressure: f64,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> BenchResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mechanism = match &cli.mechanism {
        Some(path) => load_yaml(&fs::read_to_string(path)?)?,
        None => load_mechanism(&synthetic_mechanism(cli.species, cli.reactions))?,
    };

    let config = BenchConfig {
        iterations: cli.iterations,
        t: cli.t,
        te: cli.te,
        tv: cli.tv,
        p: cli.pressure,
    };
    let report = run_benchmark(&mechanism, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("ratekit benchmark");
    println!("=================\n");
    println!(
        "  Mechanism:   {} species, {} reactions",
        report.species, report.reactions
    );
    println!(
        "  Groups:      {} ({} shortcut, {} irreversible, {} third-body)",
        report.rate_groups,
        report.shortcut_reactions,
        report.irreversible_reactions,
        report.thirdbody_reactions
    );
    println!("  Iterations:  {}", report.iterations);
    for (label, timer) in kinetics_timing::all() {
        println!(
            "  {:<12} {:.3} us/call ({} calls)",
            format!("{label}:"),
            timer.average_seconds() * 1e6,
            timer.count()
        );
    }
    println!("  checksum:    {:.6e}", report.ln_kf_checksum);

    Ok(())
}
