//! JSON Schema adapter backed by the `jsonschema` crate.

use std::fmt;
use std::sync::Arc;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::schema::{Issue, StandardSchema, Validation};
use crate::{Error, Result};

/// A compiled JSON Schema (draft 7).
#[derive(Clone)]
pub struct JsonSchema {
    document: Value,
    compiled: Arc<JSONSchema>,
}

impl JsonSchema {
    pub fn compile(document: Value) -> Result<Self> {
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|e| Error::InvalidSchemaArgument {
                message: format!("Failed to compile schema: {}", e),
            })?;
        Ok(Self {
            document,
            compiled: Arc::new(compiled),
        })
    }

    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl fmt::Debug for JsonSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchema")
            .field("document", &self.document)
            .finish()
    }
}

impl PartialEq for JsonSchema {
    fn eq(&self, other: &Self) -> bool {
        self.document == other.document
    }
}

impl StandardSchema for JsonSchema {
    fn vendor(&self) -> &str {
        "jsonschema"
    }

    fn validate(&self, value: &Value) -> Validation {
        match self.compiled.validate(value) {
            Ok(()) => Validation::Value(value.clone()),
            Err(errors) => Validation::Issues(
                errors
                    .map(|e| Issue::with_path(e.to_string(), e.instance_path.to_string()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_schema() -> JsonSchema {
        JsonSchema::compile(json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "integer"}
            },
            "required": ["name"]
        }))
        .unwrap()
    }

    #[test]
    fn accepts_matching_value() {
        let data = json!({"name": "Alice", "age": 30});
        assert_eq!(user_schema().validate(&data), Validation::Value(data));
    }

    #[test]
    fn reports_missing_required_property() {
        let result = user_schema().validate(&json!({"age": 30}));
        let issues = result.issues().unwrap();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("name"));
    }

    #[test]
    fn reports_nested_path() {
        let result = user_schema().validate(&json!({"name": "Alice", "age": "old"}));
        let issues = result.issues().unwrap();
        assert_eq!(issues[0].path.as_deref(), Some("/age"));
    }

    #[test]
    fn invalid_document_is_rejected() {
        let err = JsonSchema::compile(json!({"type": 12})).unwrap_err();
        assert!(matches!(err, Error::InvalidSchemaArgument { .. }));
    }
}
