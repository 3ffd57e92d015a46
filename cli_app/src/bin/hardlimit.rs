//! Hard limiter CLI
//!
//! # Usage
//!
//! ```bash
//! # Prompted session on stdin
//! hardlimit run
//!
//! # Pipe samples in, threshold on the command line
//! echo "3 0.5 -2.0 0.1" | hardlimit run --threshold-db -6 --quiet
//!
//! # Check the reference vectors
//! hardlimit selftest
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hardlimit_cli::self_test;
use hardlimit_cli::session::{format_buffer, process_session, read_session};
use hardlimit_core::effects::dynamics::hard_limiter::HardLimiter;
use hardlimit_core::FrameProcessor;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hardlimit")]
#[command(about = "Sign-preserving hard limiter for mono sample buffers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read samples and a threshold from stdin, limit them and print the result
    Run {
        /// Threshold in dB; read from stdin after the samples when omitted
        #[arg(long, allow_negative_numbers = true)]
        threshold_db: Option<f32>,

        /// Do not print prompts
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run the built-in reference vectors
    Selftest,
}

fn run(threshold_db: Option<f32>, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let input = if quiet {
        read_session(stdin.lock(), &mut io::sink(), threshold_db)
    } else {
        read_session(stdin.lock(), &mut out, threshold_db)
    }
    .context("reading session input")?;

    let mut processor: Box<dyn FrameProcessor + Send> = Box::new(HardLimiter::new());
    let output = process_session(&input, &mut *processor).context("limiting samples")?;

    info!(
        samples = output.len(),
        threshold_db = input.threshold_db,
        "session processed"
    );

    if !quiet {
        writeln!(out)?;
    }
    writeln!(out, "Buffer after processing:")?;
    writeln!(out, "{}", format_buffer(&output))?;
    Ok(())
}

fn selftest() -> Result<()> {
    let stdout = io::stdout();
    let failures = self_test::run_all(&mut stdout.lock())?;
    if failures > 0 {
        bail!("{} reference vector(s) failed", failures);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { threshold_db, quiet } => run(threshold_db, quiet),
        Commands::Selftest => selftest(),
    }
}
