/*
 * Unit tests for the scenario and console drivers
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_parse_*
 *  - test_scenario_*
 *  - test_session_*
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod runner_tests {
    use crate::config::{Config, RunnerConfig, StatusFormat};
    use crate::coordinator::ElevatorController;
    use crate::runner::command::parse_header;
    use crate::runner::{run_scenario, Command, CommandError, InteractiveSession, RunnerError};
    use crossbeam_channel::unbounded;

    fn run_script(script: &str, config: &Config) -> (ElevatorController, String) {
        let mut out = Vec::new();
        let controller = run_scenario(script.as_bytes(), &mut out, config).unwrap();
        (controller, String::from_utf8(out).unwrap())
    }

    fn run_session(lines: &[&str], config: &RunnerConfig) -> (ElevatorController, String) {
        let (line_tx, line_rx) = unbounded::<String>();
        for line in lines {
            line_tx.send(line.to_string()).unwrap();
        }
        drop(line_tx);

        let mut out = Vec::new();
        let session = InteractiveSession::new(ElevatorController::new(10, 1), config, line_rx, &mut out);
        let controller = session.run().unwrap();
        (controller, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        // Purpose: Verify that every scenario command is recognised

        // Assert
        assert_eq!("pass 3 5".parse(), Ok(Command::Pass { start: 3, dest: 5 }));
        assert_eq!("  step ".parse(), Ok(Command::Step));
        assert_eq!("status".parse(), Ok(Command::Status));
        assert_eq!(
            "update 1 4".parse(),
            Ok(Command::Update { elevator: 1, floor: 4, stop: None })
        );
        assert_eq!(
            "update 1 4 9".parse(),
            Ok(Command::Update { elevator: 1, floor: 4, stop: Some(9) })
        );
        assert_eq!("quit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_invalid_commands() {
        // Purpose: Verify that malformed lines produce the matching error

        // Act
        let empty = "".parse::<Command>();
        let unknown = "fly 3".parse::<Command>();
        let arity = "step 1".parse::<Command>();
        let not_a_number = "pass x 5".parse::<Command>();
        let negative_index = "update -1 3".parse::<Command>();
        let quit_with_args = "quit now".parse::<Command>();

        // Assert
        assert_eq!(empty, Err(CommandError::Empty));
        assert_eq!(unknown, Err(CommandError::Unknown("fly".to_string())));
        assert!(matches!(arity, Err(CommandError::WrongArity { found: 1, .. })));
        assert!(matches!(not_a_number, Err(CommandError::InvalidNumber { .. })));
        assert!(matches!(negative_index, Err(CommandError::InvalidNumber { .. })));
        assert!(matches!(quit_with_args, Err(CommandError::WrongArity { found: 1, .. })));
    }

    #[test]
    fn test_parse_header() {
        // Purpose: Verify the building size header

        // Assert
        assert_eq!(parse_header("10 3"), Some((10, 3)));
        assert_eq!(parse_header("10"), None);
        assert_eq!(parse_header("10 3 1"), None);
        assert_eq!(parse_header("ten 3"), None);
    }

    #[test]
    fn test_scenario_text_status() {
        // Purpose: Verify the text status block printed by a scenario

        // Arrange
        let script = "10 1\npass 3 5\nstep\nstatus\n";

        // Act
        let (controller, output) = run_script(script, &Config::default());

        // Assert
        assert_eq!(controller.ticks(), 1);
        assert_eq!(
            output,
            "------- Elevator 0 --------\n\
             Current Floor: 2\n\
             Number of Passengers: 0\n\
             Direction: up\n\
             Requested Stops: [3]\n\n"
        );
    }

    #[test]
    fn test_scenario_json_status() {
        // Purpose: Verify the JSON status line printed by a scenario

        // Arrange
        let mut config = Config::default();
        config.runner.status_format = StatusFormat::Json;
        let script = "10 2\npass 3 5\nstep\nstep\nstep\nstatus\n";

        // Act
        let (_controller, output) = run_script(script, &config);

        // Assert
        assert_eq!(
            output,
            "{\"positions\":[4,1],\"passengerCounts\":[1,0],\"directions\":[\"up\",\"up\"],\"stops\":[[5],[]]}\n"
        );
    }

    #[test]
    fn test_scenario_without_header() {
        // Purpose: Verify that the configured building size is used when the header is missing

        // Arrange
        let script = "# no header\n\npass 2 4\nstep\n";

        // Act
        let (controller, output) = run_script(script, &Config::default());

        // Assert
        assert_eq!(controller.elevators().len(), 3);
        assert_eq!(controller.n_floors(), 10);
        assert_eq!(controller.ticks(), 1);
        assert!(output.is_empty());
    }

    #[test]
    fn test_scenario_skips_invalid_lines() {
        // Purpose: Verify that bad lines are skipped and the rest of the script still runs

        // Arrange
        let script = "6 1\nbogus\npass 3\npass a b\nupdate 0 5 2\nupdate 4 1\n";

        // Act
        let (controller, _output) = run_script(script, &Config::default());

        // Assert
        let status = controller.get_system_status();
        assert_eq!(status.positions, vec![5]);
        assert_eq!(status.stops, vec![vec![2]]);
        assert!(controller.unassigned_passengers().is_empty());
    }

    #[test]
    fn test_scenario_invalid_header() {
        // Purpose: Verify that a malformed header aborts the run

        // Act
        let bad_count = run_scenario("10 x\nstep\n".as_bytes(), &mut Vec::new(), &Config::default());
        let no_floors = run_scenario("0 2\nstep\n".as_bytes(), &mut Vec::new(), &Config::default());

        // Assert
        assert!(matches!(bad_count, Err(RunnerError::InvalidHeader { line: 1, .. })));
        assert!(matches!(no_floors, Err(RunnerError::InvalidHeader { line: 1, .. })));
    }

    #[test]
    fn test_scenario_extreme_passenger_floor() {
        // Purpose: Verify that a call from the lowest representable floor does not abort the scenario

        // Act
        let (controller, _output) =
            run_script("10 1\npass 3 5\nstep\npass -2147483648 5\nstep\n", &Config::default());

        // Assert
        assert_eq!(controller.ticks(), 2);
        assert_eq!(controller.dropped(), 1);
    }

    #[test]
    fn test_scenario_quit() {
        // Purpose: Verify that quit ends the scenario early

        // Act
        let (controller, _output) = run_script("10 1\npass 3 5\nquit\nstep\n", &Config::default());

        // Assert
        assert_eq!(controller.ticks(), 0);
        assert_eq!(controller.unassigned_passengers().len(), 1);
    }

    #[test]
    fn test_session_steps_and_quits() {
        // Purpose: Verify that an empty line steps the simulation and quit ends the session

        // Act
        let (controller, output) =
            run_session(&["pass 3 5", "", "status", "quit", "step"], &RunnerConfig::default());

        // Assert
        assert_eq!(controller.ticks(), 1);
        assert!(output.contains("========= Time 0 ========="));
        assert!(output.contains("========= Time 1 ========="));
        assert!(output.contains("Requested Stops: [3]"));
    }

    #[test]
    fn test_session_ends_when_input_closes() {
        // Purpose: Verify that a hung up channel ends the session cleanly

        // Act
        let (controller, output) = run_session(&["pass 3 5", "step", "step"], &RunnerConfig::default());

        // Assert
        assert_eq!(controller.ticks(), 2);
        assert!(output.contains("Current Floor: 3"));
    }

    #[test]
    fn test_session_reports_invalid_command() {
        // Purpose: Verify that a bad command is reported and the session carries on

        // Act
        let (controller, output) = run_session(&["jump", "step"], &RunnerConfig::default());

        // Assert
        assert!(output.contains("invalid command: unknown command 'jump'"));
        assert_eq!(controller.ticks(), 1);
    }

    #[test]
    fn test_session_quiet_steps() {
        // Purpose: Verify that status after each step can be turned off

        // Arrange
        let config = RunnerConfig {
            status_format: StatusFormat::Text,
            status_after_step: false,
        };

        // Act
        let (controller, output) = run_session(&["pass 3 5", "", ""], &config);

        // Assert
        assert_eq!(controller.ticks(), 2);
        assert!(!output.contains("Elevator 0"));
    }
}
