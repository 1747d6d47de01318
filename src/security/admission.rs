//! HTTPS admission filter.
//! Rejects plaintext traffic unless it targets a local development host.

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::echo::joined_value;
use crate::http::response::EchoError;

/// Header set by the TLS-terminating proxy.
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Assumed protocol when no proxy header is present.
const DEFAULT_PROTO: &str = "https";

/// Host prefix exempt from the HTTPS requirement.
const LOCAL_HOST_PREFIX: &str = "localhost";

/// Decide whether a request may proceed.
///
/// `forwarded_proto` is `None` when the header is absent, which counts as
/// `https`. Comparison is exact and case-sensitive. Only hosts beginning with
/// `localhost` are exempt; loopback IP literals are not.
pub fn admits(forwarded_proto: Option<&str>, host: &str) -> bool {
    forwarded_proto.unwrap_or(DEFAULT_PROTO) == DEFAULT_PROTO
        || host.starts_with(LOCAL_HOST_PREFIX)
}

/// Forwarded protocol as sent by the client.
///
/// Repeated lines are folded exactly as the echo reports them, so
/// `https` followed by `http` becomes `"https, http"` and is refused.
fn forwarded_proto(headers: &HeaderMap) -> Option<String> {
    joined_value(headers, X_FORWARDED_PROTO)
}

/// Target host: `Host` header, then the URI authority (HTTP/2), else empty.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or_default()
}

/// Middleware enforcing [`admits`] before the handler runs.
pub async fn enforce_https(request: Request<Body>, next: Next) -> Response {
    let proto = forwarded_proto(request.headers());
    let host = request_host(request.headers(), request.uri());

    if admits(proto.as_deref(), host) {
        return next.run(request).await;
    }

    tracing::warn!(
        forwarded_proto = proto.as_deref().unwrap_or_default(),
        host = %host,
        method = %request.method(),
        path = %request.uri().path(),
        "Rejected non-HTTPS request"
    );
    EchoError::HttpsRequired.into_response()
}
