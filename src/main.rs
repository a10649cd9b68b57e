/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use log::info;
use std::fs::File;
use std::io::BufReader;

/* Custom libraries */
use elevator_sim::config::{self, Config, StatusFormat};
use elevator_sim::runner::{run_scenario, spawn_stdin_reader, InteractiveSession};
use elevator_sim::unwrap_or_exit;
use elevator_sim::ElevatorController;

fn cli() -> Command<'static> {
    Command::new("elevator-sim")
        .about("Discrete-time multi-elevator dispatch simulator")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .help("Number of floors, overrides the configuration"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .takes_value(true)
                .help("Number of elevators, overrides the configuration"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print status as JSON"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .about("Run a scenario file")
                .arg(Arg::new("scenario").required(true).help("Scenario file")),
        )
        .subcommand(Command::new("cli").about("Interactive console"))
}

// Applies command line overrides on top of the loaded configuration
fn apply_overrides(config: &mut Config, matches: &ArgMatches) {
    if let Some(floors) = matches.value_of("floors") {
        config.simulation.n_floors = unwrap_or_exit!(floors.parse(), "Invalid --floors");
    }
    if let Some(elevators) = matches.value_of("elevators") {
        config.simulation.n_elevators = unwrap_or_exit!(elevators.parse(), "Invalid --elevators");
    }
    if matches.is_present("json") {
        config.runner.status_format = StatusFormat::Json;
    }
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config(config_path), "Configuration error");
    apply_overrides(&mut config, &matches);
    unwrap_or_exit!(config.simulation.validate(), "Configuration error");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let controller = match matches.subcommand() {
        Some(("run", sub)) => {
            let path = sub.value_of("scenario").unwrap_or_default();
            let file = unwrap_or_exit!(File::open(path), format!("Cannot open {}", path));
            unwrap_or_exit!(
                run_scenario(BufReader::new(file), &mut out, &config),
                "Scenario failed"
            )
        }
        _ => {
            // Start the stdin reader and hand its channel to the session
            let line_rx = unwrap_or_exit!(spawn_stdin_reader(), "Failed to start stdin reader");
            let session = InteractiveSession::new(
                ElevatorController::from_config(&config.simulation),
                &config.runner,
                line_rx,
                &mut out,
            );
            unwrap_or_exit!(session.run(), "Session failed")
        }
    };

    info!(
        "Simulated {} ticks: {} passengers delivered, {} dropped",
        controller.ticks(),
        controller.delivered(),
        controller.dropped()
    );
}
