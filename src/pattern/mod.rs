//! Path-template compiler.
//!
//! Templates are literal text with embedded parameters:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `:name` | required parameter, one encoded segment |
//! | `*name` | wildcard, may span several segments |
//! | `{...}` | optional group, dropped entirely when a parameter inside is missing |
//! | `\x` | literal `x` |
//!
//! ```
//! use exter::pattern::{generate_formatted_path, PathParams};
//!
//! let path = generate_formatted_path(
//!     "/users/:userId/posts{/:postId}",
//!     &PathParams::from([("userId", "123")]),
//! )
//! .unwrap();
//! assert_eq!(path, "/users/123/posts");
//! ```

mod error;
mod format;
mod params;
mod parser;
mod shape;
mod token;

pub use error::{PatternError, PatternResult};
pub use params::PathParams;
pub use shape::{ParamEntry, ParamSchema, ParamShape};
pub use token::Token;

use crate::{Error, Result};

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: String,
    tokens: Vec<Token>,
}

impl PathPattern {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn shape(&self) -> ParamShape {
        ParamShape::from_tokens(&self.tokens)
    }

    /// Substitute `params` into the template.
    ///
    /// Fails with [`Error::MissingParameters`] naming every required
    /// parameter without a value, in declaration order.
    pub fn format(&self, params: &PathParams) -> Result<String> {
        let mut out = String::with_capacity(self.template.len());
        let missing = format::render(&self.tokens, params, &mut out);
        if !missing.is_empty() {
            return Err(Error::MissingParameters { names: missing });
        }
        Ok(out)
    }
}

/// Parse a path template, wrapping tokenizer failures with the template text.
pub fn parse(template: &str) -> Result<PathPattern> {
    let tokens = parser::tokenize(template).map_err(|source| Error::PatternParse {
        path: template.to_string(),
        source,
    })?;
    Ok(PathPattern {
        template: template.to_string(),
        tokens,
    })
}

/// Build a concrete path from a template and parameter values.
pub fn generate_formatted_path(template: &str, params: &PathParams) -> Result<String> {
    parse(template)?.format(params)
}

/// Derive a validator for the parameters a template accepts.
pub fn pattern_to_schema(template: &str) -> Result<ParamSchema> {
    ParamSchema::from_pattern(&parse(template)?)
}
