/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected} arguments, got {found}")]
    WrongArity {
        command: String,
        expected: &'static str,
        found: usize,
    },
    #[error("'{value}' is not a number: {source}")]
    InvalidNumber { value: String, source: ParseIntError },
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize status: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scenario header on line {line}: {reason}")]
    InvalidHeader { line: usize, reason: String },
}
