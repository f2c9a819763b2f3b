//! Error detail attached to every failed outcome.

use crate::client::outcome::FailureCode;
use crate::schema::{summarize, Issue};
use std::fmt;
use thiserror::Error;

/// Why a failed outcome's body could not be used.
#[derive(Debug, Error)]
pub enum RequestErrorCause {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema validation failed: {}", summarize(.0))]
    Issues(Vec<Issue>),
}

/// Human-readable description of a failed request.
#[derive(Debug, Error)]
#[error("Error while fetching [{}]: {name}", .url.as_deref().unwrap_or("<unknown>"))]
pub struct RequestError {
    name: String,
    code: FailureCode,
    status_code: Option<u16>,
    status_text: Option<String>,
    url: Option<String>,
    #[source]
    cause: Option<RequestErrorCause>,
}

impl RequestError {
    pub fn new(name: impl Into<String>, code: FailureCode) -> Self {
        Self {
            name: name.into(),
            code,
            status_code: None,
            status_text: None,
            url: None,
            cause: None,
        }
    }

    pub fn with_status(mut self, status_code: u16, status_text: impl Into<String>) -> Self {
        self.status_code = Some(status_code);
        self.status_text = Some(status_text.into());
        self
    }

    pub fn with_url(mut self, url: impl fmt::Display) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<RequestErrorCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Short description without the URL prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &FailureCode {
        &self.code
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn cause(&self) -> Option<&RequestErrorCause> {
        self.cause.as_ref()
    }
}

impl From<Vec<Issue>> for RequestErrorCause {
    fn from(issues: Vec<Issue>) -> Self {
        RequestErrorCause::Issues(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn message_includes_url_and_name() {
        let err = RequestError::new("Request failed with status 404", FailureCode::RequestFailed(404))
            .with_status(404, "Not Found")
            .with_url("https://api.example.com/posts/1");
        assert_eq!(
            err.to_string(),
            "Error while fetching [https://api.example.com/posts/1]: Request failed with status 404"
        );
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.status_text(), Some("Not Found"));
        assert_eq!(err.code().to_string(), "REQUEST_FAILED_404");
        assert!(err.source().is_none());
    }

    #[test]
    fn unknown_url_placeholder() {
        let err = RequestError::new("Failed to parse response as JSON", FailureCode::CouldNotParseJson);
        assert_eq!(
            err.to_string(),
            "Error while fetching [<unknown>]: Failed to parse response as JSON"
        );
    }

    #[test]
    fn issues_are_exposed_as_source() {
        let err = RequestError::new("Response validation failed", FailureCode::ResponseValidationFailed)
            .with_cause(vec![Issue::with_path("\"x\" is not of type \"number\"", "/id")]);
        let source = err.source().unwrap().to_string();
        assert_eq!(
            source,
            "schema validation failed: /id: \"x\" is not of type \"number\""
        );
    }
}
