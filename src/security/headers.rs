//! Security response headers.
//!
//! Every response advertises HTTPS-only policy through HSTS: one year,
//! including subdomains. The value overrides anything set further in.

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Value of the `Strict-Transport-Security` header.
pub const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";

/// Layer setting `Strict-Transport-Security` on every response.
pub fn hsts_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static(HSTS_VALUE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_YEAR_SECS: u64 = 365 * 24 * 60 * 60;

    #[test]
    fn hsts_value_matches_max_age() {
        assert_eq!(
            HSTS_VALUE,
            format!("max-age={ONE_YEAR_SECS}; includeSubDomains")
        );
    }
}
