/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::io::{BufRead, Write};
use std::thread::Builder;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::RunnerConfig;
use crate::coordinator::ElevatorController;
use crate::runner::command::{Command, Flow};
use crate::runner::errors::RunnerError;
use crate::runner::status::write_status;

/**
 * Console session driving a controller one command at a time.
 *
 * Lines arrive over a channel so the session can be fed from a stdin reader
 * thread or from a test. An empty line steps the simulation, as does `step`.
 * The session ends on `quit` or when the sending side hangs up.
 *
 * # Fields
 * - `controller`:      The simulation being driven.
 * - `config`:          Output settings.
 * - `line_rx`:         Receives raw input lines.
 * - `output`:          Where prompts and status are written.
 */
pub struct InteractiveSession<W: Write> {
    controller: ElevatorController,
    config: RunnerConfig,
    line_rx: cbc::Receiver<String>,
    output: W,
}

impl<W: Write> InteractiveSession<W> {
    pub fn new(
        controller: ElevatorController,
        config: &RunnerConfig,
        line_rx: cbc::Receiver<String>,
        output: W,
    ) -> InteractiveSession<W> {
        InteractiveSession {
            controller,
            config: config.clone(),
            line_rx,
            output,
        }
    }

    pub fn run(mut self) -> Result<ElevatorController, RunnerError> {
        self.prompt()?;

        // Main loop
        loop {
            let line = match self.line_rx.recv() {
                Ok(line) => line,
                Err(_) => {
                    info!("Input closed, ending session");
                    break;
                }
            };

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
            self.prompt()?;
        }

        Ok(self.controller)
    }

    fn handle_line(&mut self, line: &str) -> Result<Flow, RunnerError> {
        let line = line.trim();
        let command = if line.is_empty() {
            Command::Step
        } else {
            match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    warn!("Invalid command: {}", e);
                    writeln!(self.output, "invalid command: {}", e)?;
                    return Ok(Flow::Continue);
                }
            }
        };

        let stepped = command == Command::Step;
        let flow = command.apply(&mut self.controller, &mut self.output, self.config.status_format)?;

        if stepped && self.config.status_after_step {
            write_status(
                &mut self.output,
                &self.controller.get_system_status(),
                self.config.status_format,
            )?;
        }
        Ok(flow)
    }

    fn prompt(&mut self) -> Result<(), RunnerError> {
        writeln!(
            self.output,
            "========= Time {} =========",
            self.controller.ticks()
        )?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }
}

/// Spawns a thread forwarding stdin lines over a channel. The channel closes at end of input.
pub fn spawn_stdin_reader() -> std::io::Result<cbc::Receiver<String>> {
    let (line_tx, line_rx) = cbc::unbounded::<String>();

    let stdin_thread = Builder::new().name("stdin_reader".into());
    stdin_thread.spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if line_tx.send(l).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Error reading from stdin: {}", e);
                    break;
                }
            }
        }
    })?;

    Ok(line_rx)
}
