use crate::pattern::PatternError;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration problems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key that caused the error (e.g., "base_url", "routes[2].endpoint")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending value)
    pub details: Option<String>,
    /// Component that raised the error (e.g., "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Errors raised synchronously by templating, configuration and transport.
///
/// HTTP-level failures (non-2xx status, undecodable or invalid bodies) are not
/// errors; they come back as [`crate::client::Outcome::Failure`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to parse path: {path}. Error: {source}")]
    PatternParse {
        path: String,
        #[source]
        source: PatternError,
    },

    #[error("Missing parameters: {}", .names.join(", "))]
    MissingParameters { names: Vec<String> },

    #[error("Invalid schema argument: {message}")]
    InvalidSchemaArgument { message: String },

    #[error("Route with endpoint \"{endpoint}\" not found.")]
    RouteNotFound { endpoint: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_lists_context() {
        let err = Error::configuration_with_context(
            "invalid base URL",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details("relative URL without a base")
                .with_source("client_builder"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid base URL (field: base_url, details: relative URL without a base, source: client_builder)"
        );
        assert_eq!(err.context().and_then(|c| c.field_path.as_deref()), Some("base_url"));
    }

    #[test]
    fn configuration_error_without_context() {
        let err = Error::configuration_with_context("no base URL", ErrorContext::new());
        assert_eq!(err.to_string(), "Configuration error: no base URL");
    }

    #[test]
    fn route_not_found_message() {
        let err = Error::RouteNotFound {
            endpoint: "/nope".to_string(),
        };
        assert_eq!(err.to_string(), "Route with endpoint \"/nope\" not found.");
        assert!(err.context().is_none());
    }
}
