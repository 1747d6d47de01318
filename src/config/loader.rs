//! Configuration loading from the environment and command line.
//!
//! Every setting can be given as a flag or through its environment variable.
//! Flags win over the environment; unset values fall back to defaults.

use std::net::{IpAddr, Ipv4Addr};

use clap::Parser;

use crate::config::schema::{
    EchoConfig, ListenerConfig, LogFormat, ObservabilityConfig, TimeoutConfig, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Parser)]
#[command(name = "header-echo")]
#[command(version, about = "Echoes request headers, method, path and client address as JSON", long_about = None)]
pub struct Cli {
    /// Interface to listen on
    #[arg(long, env = "LISTEN_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Per-request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Turn parsed arguments into a validated configuration.
    pub fn into_config(self) -> Result<EchoConfig, ConfigError> {
        let config = EchoConfig {
            listener: ListenerConfig {
                host: self.host,
                port: self.port,
            },
            timeouts: TimeoutConfig {
                request_secs: self.request_timeout_secs,
            },
            observability: ObservabilityConfig {
                log_format: self.log_format,
            },
        };

        validate_config(&config).map_err(ConfigError::Validation)?;

        Ok(config)
    }
}

/// Load and validate configuration from the process arguments and environment.
///
/// Malformed values (e.g. a non-numeric `PORT`) make clap print a usage error
/// and exit the process.
pub fn load_config() -> Result<EchoConfig, ConfigError> {
    Cli::parse().into_config()
}
