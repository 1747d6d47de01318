//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware pipeline)
//!     → security::admission (HTTPS check, may short-circuit with 403)
//!     → echo.rs (reflect method, path, headers, peer address)
//!     → security::headers (add Strict-Transport-Security)
//!     → Send to client
//! ```

pub mod echo;
pub mod response;
pub mod server;

pub use echo::{EchoResponse, EchoedHeaders};
pub use response::EchoError;
pub use server::{HttpServer, ServerError};
