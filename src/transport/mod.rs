//! Transport boundary: one request in, one fully buffered response out.

mod http;
mod options;

pub use http::HttpTransport;
pub use options::{RequestBody, RequestOptions};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::Method;
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub options: RequestOptions,
}

/// A response whose body has been read once and can be viewed many times.
///
/// Cloning is cheap; the body is reference counted.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Sends requests. Implemented by [`HttpTransport`]; tests and embedders may
/// provide their own.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static str) -> TransportResponse {
        TransportResponse {
            status,
            status_text: String::new(),
            url: Url::parse("http://localhost/").unwrap(),
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(304, "").is_success());
        assert!(!response(404, "").is_success());
        assert!(!response(199, "").is_success());
    }

    #[test]
    fn body_views_are_independent() {
        let res = response(200, r#"{"ok":true}"#);
        let copy = res.clone();
        assert_eq!(res.text(), r#"{"ok":true}"#);
        assert_eq!(copy.json().unwrap(), serde_json::json!({"ok": true}));
        assert_eq!(res.json().unwrap()["ok"], true);
    }

    #[test]
    fn empty_body_is_not_json() {
        assert!(response(200, "").json().is_err());
    }
}
