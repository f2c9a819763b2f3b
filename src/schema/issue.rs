//! Validation issues reported by schema adapters.

use std::fmt;

/// A single reason a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Error message describing what went wrong
    pub message: String,
    /// Location inside the value (JSON pointer such as `/user/name`), if known
    pub path: Option<String>,
}

impl Issue {
    pub fn new(message: impl Into<String>, path: Option<String>) -> Self {
        Self {
            message: message.into(),
            path,
        }
    }

    pub fn with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(message, Some(path.into()))
    }

    pub fn without_path(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) if !path.is_empty() => write!(f, "{}: {}", path, self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Issue {}

/// Issues joined into one line, for logs and error messages.
pub(crate) fn summarize(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_path() {
        let issue = Issue::without_path("Invalid type");
        assert_eq!(issue.to_string(), "Invalid type");
    }

    #[test]
    fn display_with_path() {
        let issue = Issue::with_path("Invalid type", "/user/name");
        assert_eq!(issue.to_string(), "/user/name: Invalid type");
    }

    #[test]
    fn empty_path_is_not_printed() {
        let issue = Issue::with_path("Invalid type", "");
        assert_eq!(issue.to_string(), "Invalid type");
    }

    #[test]
    fn summarize_joins_issues() {
        let issues = vec![
            Issue::with_path("a", "/x"),
            Issue::without_path("b"),
        ];
        assert_eq!(summarize(&issues), "/x: a; b");
    }
}
