//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the echo
//! service. All types carry defaults matching the documented environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8777;

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Root configuration for the echo service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Interface to bind, all interfaces by default.
    pub host: IpAddr,

    /// TCP port to listen on.
    pub port: u16,
}

impl ListenerConfig {
    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Output format of the log subscriber.
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listener_binds_all_interfaces_on_8777() {
        let config = EchoConfig::default();
        assert_eq!(config.listener.socket_addr().to_string(), "0.0.0.0:8777");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }
}
