//! Route definitions.

use crate::pattern::{self, ParamSchema, PathPattern};
use crate::schema::ResultSchema;
use crate::Result;
use std::sync::OnceLock;

/// An endpoint template paired with its result schemas.
///
/// The template is parsed when the route is created, so malformed templates
/// fail before any request is made.
#[derive(Debug)]
pub struct Route {
    pattern: PathPattern,
    result: ResultSchema,
    params_schema: OnceLock<ParamSchema>,
}

impl Route {
    pub fn new(endpoint: impl AsRef<str>, result: ResultSchema) -> Result<Self> {
        Ok(Self {
            pattern: pattern::parse(endpoint.as_ref())?,
            result,
            params_schema: OnceLock::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.pattern.template()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn result(&self) -> &ResultSchema {
        &self.result
    }

    /// Validator for this route's path parameters, built on first use.
    pub fn params_schema(&self) -> Result<&ParamSchema> {
        if let Some(schema) = self.params_schema.get() {
            return Ok(schema);
        }
        let schema = ParamSchema::from_pattern(&self.pattern)?;
        Ok(self.params_schema.get_or_init(|| schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{result, StandardSchema};
    use crate::Error;
    use serde_json::json;

    fn schemas() -> ResultSchema {
        result(json!({"id": "number"}), None).unwrap()
    }

    #[test]
    fn keeps_endpoint_text() {
        let route = Route::new("/posts/:id", schemas()).unwrap();
        assert_eq!(route.endpoint(), "/posts/:id");
        assert_eq!(route.pattern().shape().get("id"), Some(true));
    }

    #[test]
    fn malformed_endpoint_fails_fast() {
        let err = Route::new("/posts/{:id", schemas()).unwrap_err();
        assert!(matches!(err, Error::PatternParse { .. }));
    }

    #[test]
    fn params_schema_is_cached() {
        let route = Route::new("/posts/:id{/:rev}", schemas()).unwrap();
        let first = route.params_schema().unwrap() as *const ParamSchema;
        let second = route.params_schema().unwrap() as *const ParamSchema;
        assert_eq!(first, second);
        assert!(route
            .params_schema()
            .unwrap()
            .validate(&json!({"id": "1"}))
            .is_valid());
    }
}
