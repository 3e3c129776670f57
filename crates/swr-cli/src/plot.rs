//! Sweep chart rendering.
//!
//! Draws the raw VSWR curve, its smoothed counterpart, and a 1.0 reference
//! line. Accepts either sweep CSV flavor; impedance sweeps are converted on
//! the fly.

use anyhow::{anyhow, bail, Context, Result};
use lib_analyzer::csv::{read_sweep_csv, SweepCsv};
use lib_dsp::{smooth_vswr, sweep_to_vswr, DEFAULT_CUTOFF, DEFAULT_NUM_TAPS};
use lib_types::{Ohms, VswrPoint, VswrSweep};
use plotters::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Points below this frequency (MHz) are ignored as DC artifacts.
const MIN_PLOT_MHZ: f64 = 0.10;

/// VSWR axis cap; mismatches beyond this flatten the interesting region.
const MAX_PLOT_VSWR: f64 = 10.0;

/// Annotate minima only while the chart stays readable.
const MAX_ANNOTATIONS: usize = 15;

/// Minima worth calling out on an antenna plot.
const ANNOTATION_VSWR_LIMIT: f64 = 3.0;

pub fn plot_sweep(csv: &Path, annotate: bool, output: Option<PathBuf>) -> Result<()> {
    let file =
        File::open(csv).with_context(|| format!("failed to open {}", csv.display()))?;
    let sweep = read_sweep_csv(BufReader::new(file))
        .with_context(|| format!("failed to read {}", csv.display()))?;

    let points: VswrSweep = match sweep {
        SweepCsv::Impedance(points) => sweep_to_vswr(&points, Ohms::Z0_50),
        SweepCsv::Vswr(points) => points,
    }
    .into_iter()
    .filter(|p| p.frequency.as_mhz() >= MIN_PLOT_MHZ)
    .collect();

    if points.len() < 2 {
        bail!("{}: need at least two plottable points", csv.display());
    }

    let smoothed = smooth_vswr(&points, DEFAULT_NUM_TAPS, DEFAULT_CUTOFF)
        .context("failed to smooth sweep")?;

    let out = output.unwrap_or_else(|| csv.with_extension("png"));
    render(&points, &smoothed, annotate, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn render(points: &[VswrPoint], smoothed: &[VswrPoint], annotate: bool, out: &Path) -> Result<()> {
    let f_min = points[0].frequency.as_mhz();
    let f_max = points[points.len() - 1].frequency.as_mhz();

    let finite_max = points
        .iter()
        .chain(smoothed)
        .map(|p| p.vswr)
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);
    let y_max = (finite_max * 1.05).clamp(2.0, MAX_PLOT_VSWR);

    let root = BitMapBackend::new(out, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("failed to render chart: {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("VSWR from {f_min:.2} MHz to {f_max:.2} MHz"),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(f_min..f_max, 0.0..y_max)
        .map_err(|e| anyhow!("failed to build chart: {e}"))?;

    chart
        .configure_mesh()
        .x_desc("Frequency [MHz]")
        .y_desc("VSWR")
        .draw()
        .map_err(|e| anyhow!("failed to draw mesh: {e}"))?;

    // Infinite values draw clamped to the axis cap
    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .map(|p| (p.frequency.as_mhz(), p.vswr.min(y_max))),
            &BLUE,
        ))
        .map_err(|e| anyhow!("failed to draw raw series: {e}"))?;

    chart
        .draw_series(LineSeries::new(
            smoothed
                .iter()
                .map(|p| (p.frequency.as_mhz(), p.vswr.min(y_max))),
            &RED,
        ))
        .map_err(|e| anyhow!("failed to draw smoothed series: {e}"))?;

    chart
        .draw_series(DashedLineSeries::new(
            [(f_min, 1.0), (f_max, 1.0)],
            8,
            4,
            RED.stroke_width(1),
        ))
        .map_err(|e| anyhow!("failed to draw reference line: {e}"))?;

    if annotate {
        let marked = annotated_minima(points, smoothed);
        if marked.len() <= MAX_ANNOTATIONS {
            chart
                .draw_series(marked.iter().map(|&i| {
                    let f = points[i].frequency.as_mhz();
                    let v = points[i].vswr;
                    Text::new(
                        format!("{f:.2} MHz, {v:.2} VSWR"),
                        (f, v.min(y_max)),
                        ("sans-serif", 14),
                    )
                }))
                .map_err(|e| anyhow!("failed to draw annotations: {e}"))?;
        } else {
            tracing::warn!(
                minima = marked.len(),
                "too many minima to annotate, skipping labels"
            );
        }
    }

    root.present()
        .map_err(|e| anyhow!("failed to write {}: {e}", out.display()))?;
    Ok(())
}

/// Indices of smoothed-curve local minima whose raw VSWR is low enough to
/// be an actual match, not ripple.
fn annotated_minima(points: &[VswrPoint], smoothed: &[VswrPoint]) -> Vec<usize> {
    (1..smoothed.len().saturating_sub(1))
        .filter(|&i| {
            smoothed[i].vswr < smoothed[i - 1].vswr && smoothed[i].vswr < smoothed[i + 1].vswr
        })
        .filter(|&i| points[i].vswr < ANNOTATION_VSWR_LIMIT)
        .collect()
}
