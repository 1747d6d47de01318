//! Echo handler.
//!
//! Reflects the incoming request back as JSON:
//!
//! ```text
//! { "headers": { <name>: <value>, ... },
//!   "method": "<METHOD>",
//!   "path": "/<captured path>",
//!   "remote_addr": "<client ip>" }
//! ```
//!
//! # Design Decisions
//! - Header names are echoed in the lowercase form hyper normalizes them
//!   to (`x-forwarded-proto`, not `X-Forwarded-Proto`), in the order they
//!   first appeared; the client's original casing is not recoverable
//! - Repeated header lines are folded into one value joined by `", "`
//! - Non-UTF-8 header bytes are decoded lossily rather than rejected

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path},
    http::{header::AsHeaderName, HeaderMap, Method},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Request headers in arrival order, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoedHeaders(Vec<(String, String)>);

impl EchoedHeaders {
    /// Value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for EchoedHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Body of a successful echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoResponse {
    pub headers: EchoedHeaders,
    pub method: String,
    pub path: String,
    pub remote_addr: String,
}

/// All lines of header `name` folded into one value, `None` when absent.
///
/// Lines are joined with `", "` in arrival order; bytes that are not UTF-8
/// are decoded lossily.
pub fn joined_value<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Option<String> {
    let mut values = headers.get_all(name).iter().peekable();
    values.peek()?;

    Some(
        values
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Collect every header into an ordered name → value mapping.
pub fn collect_headers(headers: &HeaderMap) -> EchoedHeaders {
    let collected = headers
        .keys()
        .filter_map(|name| {
            joined_value(headers, name).map(|value| (name.as_str().to_owned(), value))
        })
        .collect();

    EchoedHeaders(collected)
}

/// `/` for the root, otherwise the captured path with a leading slash.
pub fn normalize_path(captured: Option<&str>) -> String {
    match captured {
        None | Some("") => "/".to_owned(),
        Some(path) => format!("/{path}"),
    }
}

fn echo(
    peer: SocketAddr,
    method: &Method,
    captured: Option<&str>,
    headers: &HeaderMap,
) -> EchoResponse {
    EchoResponse {
        headers: collect_headers(headers),
        method: method.as_str().to_owned(),
        path: normalize_path(captured),
        remote_addr: peer.ip().to_string(),
    }
}

/// Handler for `/`.
pub async fn echo_root(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    headers: HeaderMap,
) -> Json<EchoResponse> {
    tracing::debug!(method = %method, path = "/", peer = %peer, "Echoing request");
    Json(echo(peer, &method, None, &headers))
}

/// Handler for `/{*path}`.
pub async fn echo_path(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Json<EchoResponse> {
    tracing::debug!(method = %method, path = %path, peer = %peer, "Echoing request");
    Json(echo(peer, &method, Some(&path), &headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};

    #[test]
    fn root_normalizes_to_slash() {
        assert_eq!(normalize_path(None), "/");
        assert_eq!(normalize_path(Some("")), "/");
    }

    #[test]
    fn captured_path_gets_leading_slash() {
        assert_eq!(normalize_path(Some("a/b")), "/a/b");
        assert_eq!(normalize_path(Some("foo/bar/")), "/foo/bar/");
    }

    #[test]
    fn headers_keep_first_seen_order() {
        let mut headers = HeaderMap::new();
        headers.insert("x-zeta", HeaderValue::from_static("1"));
        headers.insert("accept", HeaderValue::from_static("*/*"));
        headers.insert("x-alpha", HeaderValue::from_static("2"));

        let names: Vec<_> = collect_headers(&headers)
            .iter()
            .map(|(n, _)| n.to_owned())
            .collect();
        assert_eq!(names, ["x-zeta", "accept", "x-alpha"]);
    }

    #[test]
    fn repeated_headers_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        headers.append("via", HeaderValue::from_static("1.1 lb"));
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.2"));

        let echoed = collect_headers(&headers);
        assert_eq!(echoed.len(), 2);
        assert_eq!(echoed.get("X-Forwarded-For"), Some("10.0.0.1, 10.0.0.2"));
        assert_eq!(echoed.get("via"), Some("1.1 lb"));
    }

    #[test]
    fn joined_value_is_none_when_absent() {
        let mut headers = HeaderMap::new();
        headers.append("x-forwarded-proto", HeaderValue::from_static("https"));
        headers.append("x-forwarded-proto", HeaderValue::from_static("http"));

        assert_eq!(
            joined_value(&headers, "x-forwarded-proto").as_deref(),
            Some("https, http")
        );
        assert_eq!(joined_value(&headers, "x-missing"), None);
    }

    #[test]
    fn non_utf8_values_are_decoded_lossily() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-raw"),
            HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );

        assert_eq!(collect_headers(&headers).get("x-raw"), Some("caf\u{fffd}"));
    }

    #[test]
    fn response_serializes_headers_as_object() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        let peer: SocketAddr = "203.0.113.7:51000".parse().unwrap();

        let body =
            serde_json::to_string(&echo(peer, &Method::PATCH, Some("x"), &headers)).unwrap();

        assert_eq!(
            body,
            r#"{"headers":{"host":"example.com","x-forwarded-proto":"https"},"method":"PATCH","path":"/x","remote_addr":"203.0.113.7"}"#
        );
    }

    #[test]
    fn remote_addr_drops_the_port() {
        let peer: SocketAddr = "[2001:db8::1]:443".parse().unwrap();
        let response = echo(peer, &Method::GET, None, &HeaderMap::new());

        assert_eq!(response.remote_addr, "2001:db8::1");
        assert!(response.headers.is_empty());
    }
}
