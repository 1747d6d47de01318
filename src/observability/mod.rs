//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events and spans
//!     → logging.rs (subscriber: filter + formatter)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - JSON for production, pretty format for development
//! - Filter directives come from `RUST_LOG` when present

pub mod logging;
