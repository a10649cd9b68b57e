pub mod command;
pub mod errors;
pub mod interactive;
pub mod scenario;
pub mod status;

mod runner_tests;

pub use command::Command;
pub use errors::{CommandError, RunnerError};
pub use interactive::{spawn_stdin_reader, InteractiveSession};
pub use scenario::run_scenario;
pub use status::write_status;
