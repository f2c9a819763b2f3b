use serde_json::Value;

use crate::schema::{Issue, StandardSchema, Validation};

/// Accepts only `null`. The default error schema of a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsentSchema;

impl StandardSchema for AbsentSchema {
    fn vendor(&self) -> &str {
        "absent"
    }

    fn validate(&self, value: &Value) -> Validation {
        if value.is_null() {
            Validation::Value(Value::Null)
        } else {
            Validation::Issues(vec![Issue::without_path(format!(
                "Expected null or undefined, got {}",
                value
            ))])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_null_only() {
        assert!(AbsentSchema.validate(&Value::Null).is_valid());
        assert!(!AbsentSchema.validate(&json!({})).is_valid());
        assert!(!AbsentSchema.validate(&json!("")).is_valid());
    }
}
