//! Flat CSV sweep formats.
//!
//! Two line shapes, no header, no escaping:
//!
//! - impedance sweep: `<freq_MHz>,<resistance_ohm>,<reactance_ohm>`
//! - VSWR sweep: `<freq_MHz>,<vswr>`
//!
//! Infinite VSWR values use Rust's standard f64 text form (`inf`) on both
//! read and write.

use crate::error::CsvError;
use lib_types::{Hertz, ImpedancePoint, ImpedanceSweep, Ohms, VswrPoint, VswrSweep};
use std::io::{BufRead, Write};

/// A sweep CSV of either flavor, detected from the field count.
pub enum SweepCsv {
    Impedance(ImpedanceSweep),
    Vswr(VswrSweep),
}

/// Parse one impedance data line (`MHz,R,X`).
///
/// Shared by the CSV reader and the sweep acquisition path, which receives
/// the same shape directly from the device.
pub(crate) fn parse_impedance_fields(line: &str) -> Result<ImpedancePoint, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 3 {
        return Err(format!("expected 3 fields, got {}", fields.len()));
    }
    Ok(ImpedancePoint {
        frequency: Hertz::from_mhz(parse_f64(fields[0])?),
        resistance: Ohms(parse_f64(fields[1])?),
        reactance: Ohms(parse_f64(fields[2])?),
    })
}

/// Parse one VSWR data line (`MHz,vswr`).
fn parse_vswr_fields(line: &str) -> Result<VswrPoint, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 2 {
        return Err(format!("expected 2 fields, got {}", fields.len()));
    }
    Ok(VswrPoint {
        frequency: Hertz::from_mhz(parse_f64(fields[0])?),
        vswr: parse_f64(fields[1])?,
    })
}

fn parse_f64(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number {:?}", value))
}

/// Parse every non-empty line, reporting 1-based line numbers on failure.
fn collect_points<T>(
    lines: &[String],
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Vec<T>, CsvError> {
    let mut points = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let point = parse(line).map_err(|message| CsvError::Malformed {
            line: idx + 1,
            message,
        })?;
        points.push(point);
    }
    Ok(points)
}

/// Read an impedance sweep CSV, preserving line order.
pub fn read_impedance_csv<R: BufRead>(reader: R) -> Result<ImpedanceSweep, CsvError> {
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    collect_points(&lines, parse_impedance_fields)
}

/// Read a VSWR sweep CSV, preserving line order.
pub fn read_vswr_csv<R: BufRead>(reader: R) -> Result<VswrSweep, CsvError> {
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    collect_points(&lines, parse_vswr_fields)
}

/// Read a sweep CSV of either flavor.
///
/// The flavor is detected from the field count of the first non-empty line:
/// 3 fields is an impedance sweep, 2 a VSWR sweep.
pub fn read_sweep_csv<R: BufRead>(reader: R) -> Result<SweepCsv, CsvError> {
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

    let fields = lines
        .iter()
        .find(|l| !l.trim().is_empty())
        .map(|l| l.split(',').count());

    match fields {
        Some(3) | None => collect_points(&lines, parse_impedance_fields).map(SweepCsv::Impedance),
        Some(2) => collect_points(&lines, parse_vswr_fields).map(SweepCsv::Vswr),
        Some(n) => Err(CsvError::Malformed {
            line: 1,
            message: format!("expected 2 or 3 fields, got {n}"),
        }),
    }
}

/// Write an impedance sweep CSV.
pub fn write_impedance_csv<W: Write>(
    mut writer: W,
    points: &[ImpedancePoint],
) -> Result<(), CsvError> {
    for p in points {
        writeln!(
            writer,
            "{},{},{}",
            p.frequency.as_mhz(),
            p.resistance.0,
            p.reactance.0
        )?;
    }
    Ok(())
}

/// Write a VSWR sweep CSV.
pub fn write_vswr_csv<W: Write>(mut writer: W, points: &[VswrPoint]) -> Result<(), CsvError> {
    for p in points {
        writeln!(writer, "{},{}", p.frequency.as_mhz(), p.vswr)?;
    }
    Ok(())
}
