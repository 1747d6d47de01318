//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment / command line
//!     → loader.rs (clap parse, env fallbacks)
//!     → validation.rs (semantic checks)
//!     → EchoConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never mutated
//! - Every setting has a default so a bare `PORT` (or nothing) is enough
//! - Validation separates syntactic (clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, Cli, ConfigError};
pub use schema::{EchoConfig, ListenerConfig, LogFormat, ObservabilityConfig, TimeoutConfig};
