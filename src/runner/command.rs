/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use std::io::Write;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::StatusFormat;
use crate::coordinator::ElevatorController;
use crate::runner::errors::{CommandError, RunnerError};
use crate::runner::status::write_status;
use crate::shared::{Floor, Passenger};

/// One line of a scenario, translated to a controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pass {
        start: Floor,
        dest: Floor,
    },
    Step,
    Status,
    Update {
        elevator: usize,
        floor: Floor,
        stop: Option<Floor>,
    },
    Quit,
}

/// Whether the driver should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match name {
            "pass" => {
                expect_arity(name, &args, 2, 2, "2")?;
                Ok(Command::Pass {
                    start: parse_number(args[0])?,
                    dest: parse_number(args[1])?,
                })
            }
            "step" => {
                expect_arity(name, &args, 0, 0, "0")?;
                Ok(Command::Step)
            }
            "status" => {
                expect_arity(name, &args, 0, 0, "0")?;
                Ok(Command::Status)
            }
            "update" => {
                expect_arity(name, &args, 2, 3, "2 or 3")?;
                let stop = match args.get(2) {
                    Some(arg) => Some(parse_number(arg)?),
                    None => None,
                };
                Ok(Command::Update {
                    elevator: parse_number(args[0])?,
                    floor: parse_number(args[1])?,
                    stop,
                })
            }
            "quit" | "exit" => {
                expect_arity(name, &args, 0, 0, "0")?;
                Ok(Command::Quit)
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

impl Command {
    /// Runs the command against `controller`, writing any status output to `out`.
    pub fn apply<W: Write>(
        self,
        controller: &mut ElevatorController,
        out: &mut W,
        format: StatusFormat,
    ) -> Result<Flow, RunnerError> {
        match self {
            Command::Pass { start, dest } => {
                controller.call_elevator(Passenger::new(start, dest));
            }
            Command::Step => controller.time_step(),
            Command::Status => write_status(out, &controller.get_system_status(), format)?,
            Command::Update {
                elevator,
                floor,
                stop,
            } => {
                if let Err(e) = controller.update_elevator(elevator, floor, stop) {
                    warn!("Update ignored: {}", e);
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Parses a `<floors> <elevators>` header line.
pub fn parse_header(line: &str) -> Option<(Floor, usize)> {
    let mut words = line.split_whitespace();
    let floors = words.next()?.parse().ok()?;
    let elevators = words.next()?.parse().ok()?;
    if words.next().is_some() {
        return None;
    }
    Some((floors, elevators))
}

fn expect_arity(
    command: &str,
    args: &[&str],
    min: usize,
    max: usize,
    expected: &'static str,
) -> Result<(), CommandError> {
    if args.len() < min || args.len() > max {
        return Err(CommandError::WrongArity {
            command: command.to_string(),
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn parse_number<T: FromStr<Err = std::num::ParseIntError>>(value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|e| CommandError::InvalidNumber {
        value: value.to_string(),
        source: e,
    })
}
