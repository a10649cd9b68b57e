/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::io::{BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{Config, SimulationConfig};
use crate::coordinator::ElevatorController;
use crate::runner::command::{parse_header, Command, Flow};
use crate::runner::errors::RunnerError;

/**
 * Runs a scenario script to completion and returns the final controller.
 *
 * The first meaningful line may be a `<floors> <elevators>` header, which
 * overrides the configured building size. Blank lines and `#` comments are
 * skipped. Lines that fail to parse are logged and skipped.
 */
pub fn run_scenario<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    config: &Config,
) -> Result<ElevatorController, RunnerError> {
    let mut controller: Option<ElevatorController> = None;
    let format = config.runner.status_format;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if controller.is_none() {
            let (built, is_header) = build_controller(line, line_no, &config.simulation)?;
            controller = Some(built);
            if is_header {
                continue;
            }
        }
        let Some(sim) = controller.as_mut() else {
            continue;
        };

        match line.parse::<Command>() {
            Ok(command) => {
                debug!("Line {}: {:?}", line_no, command);
                if command.apply(sim, out, format)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => warn!("Invalid command on line {}: {}", line_no, e),
        }
    }

    let controller =
        controller.unwrap_or_else(|| ElevatorController::from_config(&config.simulation));
    debug!(
        "Scenario finished after {} ticks: {} delivered, {} dropped",
        controller.ticks(),
        controller.delivered(),
        controller.dropped()
    );
    Ok(controller)
}

// Builds the controller from the first meaningful line, reporting whether it was a header
fn build_controller(
    line: &str,
    line_no: usize,
    simulation: &SimulationConfig,
) -> Result<(ElevatorController, bool), RunnerError> {
    let first_word = line.split_whitespace().next().unwrap_or_default();
    if !first_word.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Ok((ElevatorController::from_config(simulation), false));
    }

    let (n_floors, n_elevators) = parse_header(line).ok_or_else(|| RunnerError::InvalidHeader {
        line: line_no,
        reason: format!("expected '<floors> <elevators>', got '{}'", line),
    })?;
    if n_floors < 1 {
        return Err(RunnerError::InvalidHeader {
            line: line_no,
            reason: format!("building needs at least one floor, got {}", n_floors),
        });
    }

    info!("Building with {} floors and {} elevators", n_floors, n_elevators);
    let sized = SimulationConfig {
        n_floors,
        n_elevators,
        ..simulation.clone()
    };
    Ok((ElevatorController::from_config(&sized), true))
}
