use std::io::Write;

use crate::config::StatusFormat;
use crate::runner::errors::RunnerError;
use crate::shared::SystemStatus;

/// Writes a status snapshot, either as one block per elevator or as a single JSON line.
pub fn write_status<W: Write>(
    out: &mut W,
    status: &SystemStatus,
    format: StatusFormat,
) -> Result<(), RunnerError> {
    match format {
        StatusFormat::Json => {
            serde_json::to_writer(&mut *out, status)?;
            writeln!(out)?;
        }
        StatusFormat::Text => {
            for idx in 0..status.len() {
                writeln!(out, "------- Elevator {} --------", idx)?;
                writeln!(out, "Current Floor: {}", status.positions[idx])?;
                writeln!(out, "Number of Passengers: {}", status.passenger_counts[idx])?;
                writeln!(out, "Direction: {}", status.directions[idx])?;
                writeln!(out, "Requested Stops: {:?}", status.stops[idx])?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
