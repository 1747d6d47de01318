//! HTTP header echo service library.
//!
//! Accepts any request on any path and answers with the headers, method,
//! path and client address it received. Plaintext traffic is refused unless
//! it targets a `localhost` host, and every response carries HSTS.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::EchoConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
