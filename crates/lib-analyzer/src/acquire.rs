//! Sweep acquisition.
//!
//! Runs the analyzer's fixed command sequence for one sweep:
//!
//! 1. `VER` — query firmware identity (one data line)
//! 2. `ON` — enable RF
//! 3. `FQ<hz>` — set center frequency
//! 4. `SW<hz>` — set sweep span
//! 5. `FRX<n-1>` — sweep, producing exactly `n` data lines
//! 6. `OFF` — disable RF
//!
//! Any step failing aborts the whole operation; RF disable is not attempted
//! after an abort.

use crate::csv::parse_impedance_fields;
use crate::error::ProtocolError;
use crate::transaction::{transact, transact_cmd};
use crate::transport::LineTransport;
use lib_types::{Hertz, ImpedanceSweep};

/// Analyzer command set.
mod cmds {
    pub const VERSION: &str = "VER";
    pub const RF_ON: &str = "ON";
    pub const RF_OFF: &str = "OFF";
    pub const CENTER: &str = "FQ";
    pub const SPAN: &str = "SW";
    pub const SWEEP: &str = "FRX";
}

/// Result of one completed sweep.
#[derive(Clone, Debug)]
pub struct AcquiredSweep {
    /// Firmware identity string from `VER`. Informational only.
    pub analyzer_version: String,

    /// The measured points, in frequency order by device contract.
    pub points: ImpedanceSweep,
}

/// Acquire an impedance sweep of `num_points` samples over
/// `[start, stop]`.
///
/// `progress(received, total)` is invoked once per parsed point; it is
/// advisory (UI feedback) and not part of the data contract.
///
/// The point count is enforced exactly: a response with fewer or more data
/// lines than requested is a protocol error, never a silently truncated
/// sweep.
pub fn acquire_sweep<T, F>(
    link: &mut T,
    start: Hertz,
    stop: Hertz,
    num_points: usize,
    mut progress: F,
) -> Result<AcquiredSweep, ProtocolError>
where
    T: LineTransport,
    F: FnMut(usize, usize),
{
    if stop < start {
        return Err(ProtocolError::InvalidRange { start, stop });
    }
    if num_points == 0 {
        return Err(ProtocolError::EmptySweep);
    }

    let analyzer_version = query_version(link)?;
    tracing::info!(version = %analyzer_version, "analyzer identified");

    transact_cmd(link, cmds::RF_ON)?;

    let center = start.midpoint(stop).0.round() as u64;
    let span = (stop - start).0.round() as u64;
    transact_cmd(link, &format!("{}{}", cmds::CENTER, center))?;
    transact_cmd(link, &format!("{}{}", cmds::SPAN, span))?;

    let mut points = Vec::with_capacity(num_points);
    for line in transact(link, &format!("{}{}", cmds::SWEEP, num_points - 1))? {
        let line = line?;
        if points.len() == num_points {
            return Err(ProtocolError::Overrun {
                expected: num_points,
            });
        }
        let point = parse_impedance_fields(&line).map_err(|message| {
            ProtocolError::BadDataLine {
                line: line.clone(),
                message,
            }
        })?;
        points.push(point);
        progress(points.len(), num_points);
    }
    if points.len() != num_points {
        return Err(ProtocolError::Truncated {
            expected: num_points,
            got: points.len(),
        });
    }

    transact_cmd(link, cmds::RF_OFF)?;

    Ok(AcquiredSweep {
        analyzer_version,
        points,
    })
}

/// Query the firmware identity. Exactly one data line is expected.
fn query_version<T: LineTransport>(link: &mut T) -> Result<String, ProtocolError> {
    let mut lines = transact(link, cmds::VERSION)?;
    let version = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(e)) => return Err(e),
        None => {
            return Err(ProtocolError::MissingLine {
                command: cmds::VERSION.to_string(),
            })
        }
    };

    // Drain to the terminator before the next command
    for line in lines {
        line?;
    }
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedLink;

    fn full_script() -> Vec<&'static str> {
        vec![
            "3.0", "OK", // VER
            "OK", // ON
            "OK", // FQ
            "OK", // SW
            "1.000000,50.0,0.0",
            "2.000000,49.5,1.2",
            "3.000000,48.0,-2.0",
            "OK", // FRX
            "OK", // OFF
        ]
    }

    #[test]
    fn test_zero_span_sweep() {
        let mut link = ScriptedLink::new(&full_script());
        let mut calls = Vec::new();

        let sweep = acquire_sweep(&mut link, Hertz::ZERO, Hertz::ZERO, 3, |n, total| {
            calls.push((n, total))
        })
        .unwrap();

        assert_eq!(
            link.sent,
            vec!["VER", "ON", "FQ0", "SW0", "FRX2", "OFF"]
        );
        assert_eq!(sweep.analyzer_version, "3.0");
        assert_eq!(sweep.points.len(), 3);
        assert_eq!(calls, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_center_and_span_rounding() {
        let mut link = ScriptedLink::new(&full_script());

        acquire_sweep(
            &mut link,
            Hertz(1e6),
            Hertz(2e6),
            3,
            |_, _| {},
        )
        .unwrap();

        assert_eq!(link.sent[2], "FQ1500000");
        assert_eq!(link.sent[3], "SW1000000");
    }

    #[test]
    fn test_invalid_range_checked_before_io() {
        let mut link = ScriptedLink::new(&[]);

        let err = acquire_sweep(&mut link, Hertz(10e6), Hertz(5e6), 100, |_, _| {});
        assert!(matches!(err, Err(ProtocolError::InvalidRange { .. })));
        assert!(link.sent.is_empty());
    }

    #[test]
    fn test_zero_points_checked_before_io() {
        let mut link = ScriptedLink::new(&[]);

        let err = acquire_sweep(&mut link, Hertz::ZERO, Hertz(1e6), 0, |_, _| {});
        assert!(matches!(err, Err(ProtocolError::EmptySweep)));
        assert!(link.sent.is_empty());
    }

    #[test]
    fn test_truncated_sweep_fails() {
        let mut link = ScriptedLink::new(&[
            "3.0", "OK", "OK", "OK", "OK", // VER, ON, FQ, SW
            "1.000000,50.0,0.0",
            "2.000000,49.5,1.2",
            "OK", // FRX ends one point short
        ]);

        let err = acquire_sweep(&mut link, Hertz::ZERO, Hertz(1e6), 3, |_, _| {});
        assert!(matches!(
            err,
            Err(ProtocolError::Truncated { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_surplus_point_fails() {
        let mut link = ScriptedLink::new(&[
            "3.0", "OK", "OK", "OK", "OK",
            "1.000000,50.0,0.0",
            "2.000000,49.5,1.2",
            "OK",
        ]);

        let err = acquire_sweep(&mut link, Hertz::ZERO, Hertz(1e6), 1, |_, _| {});
        assert!(matches!(err, Err(ProtocolError::Overrun { expected: 1 })));
    }

    #[test]
    fn test_unparseable_data_line_fails() {
        let mut link = ScriptedLink::new(&[
            "3.0", "OK", "OK", "OK", "OK",
            "1.000000,fifty,0.0",
            "OK",
        ]);

        let err = acquire_sweep(&mut link, Hertz::ZERO, Hertz(1e6), 1, |_, _| {});
        assert!(matches!(err, Err(ProtocolError::BadDataLine { .. })));
    }

    #[test]
    fn test_rejected_setup_command_aborts() {
        // Device rejects ON; nothing past it is sent
        let mut link = ScriptedLink::new(&["3.0", "OK", "ERROR"]);

        let err = acquire_sweep(&mut link, Hertz::ZERO, Hertz(1e6), 3, |_, _| {});
        assert!(matches!(
            err,
            Err(ProtocolError::UnsupportedCommand { .. })
        ));
        assert_eq!(link.sent, vec!["VER", "ON"]);
    }

    #[test]
    fn test_missing_version_line_fails() {
        let mut link = ScriptedLink::new(&["OK"]);

        let err = acquire_sweep(&mut link, Hertz::ZERO, Hertz(1e6), 3, |_, _| {});
        assert!(matches!(err, Err(ProtocolError::MissingLine { .. })));
    }
}
