/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub runner: RunnerConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_floors: i32,
    pub n_elevators: usize,
    pub requeue_unassigned: bool,
}

impl SimulationConfig {
    /// Rejects building sizes the simulation cannot represent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_floors < 1 {
            return Err(ConfigError::Invalid(format!(
                "n_floors must be at least 1, got {}",
                self.n_floors
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_floors: 10,
            n_elevators: 3,
            requeue_unassigned: false,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFormat {
    Text,
    Json,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RunnerConfig {
    pub status_format: StatusFormat,
    pub status_after_step: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            status_format: StatusFormat::Text,
            status_after_step: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/

/// Loads the configuration at `path`, falling back to defaults if the file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No configuration file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    let config = parse_config(&config_str).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    config.simulation.validate()?;
    Ok(config)
}

pub fn parse_config(config_str: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
