//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → admission.rs (HTTPS-only check on X-Forwarded-Proto)
//!     → echo handler
//! Outgoing response (success or rejection):
//!     → headers.rs (Strict-Transport-Security)
//! ```
//!
//! # Design Decisions
//! - TLS terminates upstream; the forwarded protocol header is trusted
//! - Hosts starting with `localhost` are exempt so plain-HTTP local testing works
//! - HSTS is applied outside admission so rejections carry it too

pub mod admission;
pub mod headers;

pub use admission::{admits, enforce_https};
pub use headers::{hsts_layer, HSTS_VALUE};
