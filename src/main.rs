//! `cpusim` - run a scheduling simulation over a job file.
//!
//! ```text
//! cpusim jobs.txt -p RR -q 2
//! ```
//!
//! Environment variables:
//! - RUST_LOG: log filter (default: warn)
//! - CPUSIM_LOG_JSON: JSON log lines on stderr (default: false)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_cpusim::workload::parse_jobs;
use u_cpusim::{SimulationConfig, SimulationReport, Simulator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "cpusim", version, about = "Single-processor CPU scheduling simulator")]
struct Cli {
    /// File with one `run_time arrival_time` pair per line
    filename: PathBuf,

    /// Scheduling algorithm: FIFO, RR or SRTN (default: FIFO)
    #[arg(short = 'p', long = "policy")]
    policy: Option<String>,

    /// Quantum for Round Robin (default: 1)
    #[arg(short = 'q', long, allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the execution timeline (text format only)
    #[arg(long)]
    timeline: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("CPUSIM_LOG_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let mut cli = Cli::parse();

    let config = SimulationConfig::from_options(cli.policy.take(), cli.quantum);
    let simulator = Simulator::from_config(&config)?;

    let input = std::fs::read_to_string(&cli.filename)
        .with_context(|| format!("File not found: {}", cli.filename.display()))?;
    let jobs = parse_jobs(&input)
        .with_context(|| format!("Failed to read jobs from {}", cli.filename.display()))?;
    debug!(file = %cli.filename.display(), jobs = jobs.len(), "loaded job list");

    let report = simulator.run(&jobs)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report, cli.timeline),
    }
    Ok(())
}

fn print_text(report: &SimulationReport, with_timeline: bool) {
    println!("Algorithm: {}", report.algorithm);
    for (id, turnaround, wait) in report.stats.outcomes() {
        println!("Job {id:>3} -- Turnaround {turnaround:>6}  Wait time {wait:>6}");
    }
    println!(
        "Average -- Turnaround {:.2}  Wait time {:.2}",
        report.avg_turnaround(),
        report.avg_wait()
    );

    if with_timeline {
        println!();
        println!("Timeline:");
        for slice in report.timeline.slices() {
            println!("  [{:>5}, {:>5})  job {}", slice.start, slice.end, slice.job_id);
        }
        println!(
            "Makespan {}  Utilization {:.2}  Context switches {}",
            report.stats.makespan, report.stats.utilization, report.stats.context_switches
        );
    }
}
