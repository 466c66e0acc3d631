use anyhow::Error;
use fortuna_bridge::BridgeError;
use fortuna_config::ConfigError;
use fortuna_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(bridge_err) = cause.downcast_ref::<BridgeError>() {
            return ExitCode::from(bridge_exit_code(bridge_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidWheel(_)
        | ConfigError::InvalidPollInterval(_)
        | ConfigError::InvalidPollTimeout { .. }
        | ConfigError::InsecureApiBaseUrl(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn bridge_exit_code(err: &BridgeError) -> u8 {
    match err {
        BridgeError::Core(_) => EXIT_INVALID_INPUT,
        BridgeError::Sdk(_) | BridgeError::ReadyTimeout { .. } | BridgeError::Cancelled => {
            EXIT_FAILURE
        }
        #[cfg(any(feature = "data-api", feature = "broadcast"))]
        BridgeError::Http(_) | BridgeError::Json(_) => EXIT_FAILURE,
        #[cfg(any(feature = "data-api", feature = "broadcast"))]
        BridgeError::Url(_) | BridgeError::InvalidEndpoint(_) => EXIT_INVALID_INPUT,
    }
}
