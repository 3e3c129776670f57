//! swr-tool: dump, convert, and plot antenna analyzer impedance sweeps.

mod plot;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_analyzer::csv::{read_impedance_csv, write_impedance_csv, write_vswr_csv};
use lib_analyzer::{acquire_sweep, SerialLink, DEFAULT_BAUD_RATE};
use lib_dsp::{smooth_vswr, sweep_to_vswr, DEFAULT_CUTOFF, DEFAULT_NUM_TAPS};
use lib_types::{Hertz, Ohms};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "swr-tool")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump an impedance sweep to CSV
    Dump {
        /// Path to the serial port, e.g. /dev/ttyUSB0
        port: String,

        /// Start frequency in Hz (e.g. 7.0e6)
        start_frequency: f64,

        /// Stop frequency in Hz (e.g. 7.3e6)
        stop_frequency: f64,

        /// Number of sweep points
        num_points: usize,

        /// Output impedance CSV path
        output: PathBuf,

        /// Serial baud rate
        #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
        baud_rate: u32,
    },

    /// Convert an impedance sweep CSV to a VSWR sweep CSV
    Imp2swr {
        /// Smooth the VSWR curve
        #[arg(long)]
        smooth: bool,

        /// Input impedance CSV path
        input: PathBuf,

        /// Output VSWR CSV path
        output: PathBuf,
    },

    /// Plot an impedance or VSWR sweep CSV to a PNG chart
    Plot {
        /// Annotate VSWR minima
        #[arg(long)]
        annotate: bool,

        /// Output PNG path (defaults to the input with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Impedance or VSWR sweep CSV
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Commands::Dump {
            port,
            start_frequency,
            stop_frequency,
            num_points,
            output,
            baud_rate,
        } => dump(
            &port,
            Hertz(start_frequency),
            Hertz(stop_frequency),
            num_points,
            &output,
            baud_rate,
        ),
        Commands::Imp2swr {
            smooth,
            input,
            output,
        } => imp2swr(smooth, &input, &output),
        Commands::Plot {
            annotate,
            output,
            csv,
        } => plot::plot_sweep(&csv, annotate, output),
    }
}

fn dump(
    port: &str,
    start: Hertz,
    stop: Hertz,
    num_points: usize,
    output: &Path,
    baud_rate: u32,
) -> Result<()> {
    let mut link = SerialLink::open(port, baud_rate)
        .with_context(|| format!("failed to open analyzer on {port}"))?;

    let sweep = acquire_sweep(&mut link, start, stop, num_points, draw_progress)
        .context("sweep failed")?;
    eprintln!();
    eprintln!("Analyzer version: {}", sweep.analyzer_version);

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    write_impedance_csv(BufWriter::new(file), &sweep.points)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(points = sweep.points.len(), path = %output.display(), "sweep written");
    Ok(())
}

/// Textual progress bar on stderr, redrawn in place per point.
fn draw_progress(count: usize, total: usize) {
    let progress = count as f64 / total as f64;
    let filled = ((progress * 76.0) as usize).min(76);
    eprint!(
        "\r[{}{}] {:3.0}% {}/{}",
        "=".repeat(filled),
        "-".repeat(76 - filled),
        progress * 100.0,
        count,
        total
    );
    let _ = io::stderr().flush();
}

fn imp2swr(smooth: bool, input: &Path, output: &Path) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let points = read_impedance_csv(BufReader::new(file))
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut vswrs = sweep_to_vswr(&points, Ohms::Z0_50);
    if smooth {
        vswrs = smooth_vswr(&vswrs, DEFAULT_NUM_TAPS, DEFAULT_CUTOFF)
            .context("failed to smooth sweep")?;
    }

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    write_vswr_csv(BufWriter::new(file), &vswrs)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(points = vswrs.len(), path = %output.display(), "VSWR sweep written");
    Ok(())
}
