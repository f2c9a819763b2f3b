//! Pluggable response validation.
//!
//! Every validator exposes one capability, [`StandardSchema::validate`],
//! which either returns the (possibly normalized) value or a list of
//! [`Issue`]s. Four adapters ship with the crate:
//!
//! - [`JsonSchema`]: a JSON Schema document
//! - [`ShapeSchema`]: a plain shape descriptor such as `{"id": "number"}`
//! - [`Typed`]: any serde type
//! - [`AbsentSchema`]: only `null`
//!
//! # Examples
//!
//! ```
//! use exter::schema::{ShapeSchema, StandardSchema};
//! use serde_json::json;
//!
//! let schema = ShapeSchema::compile(&json!({"id": "number", "title": "string"})).unwrap();
//! assert!(schema.validate(&json!({"id": 1, "title": "hi"})).is_valid());
//! assert!(!schema.validate(&json!({"id": "1"})).is_valid());
//! ```

mod absent;
mod issue;
mod json_schema;
mod result;
mod shape;
mod typed;

pub use absent::AbsentSchema;
pub use issue::Issue;
pub(crate) use issue::summarize;
pub use json_schema::JsonSchema;
pub use result::{result, ResultSchema, SchemaArg};
pub use shape::ShapeSchema;
pub use typed::Typed;

use serde_json::Value;
use std::fmt;

/// The validator capability shared by every schema implementation.
pub trait StandardSchema: Send + Sync + fmt::Debug {
    /// Name of the library or adapter providing the validation.
    fn vendor(&self) -> &str;

    fn validate(&self, value: &Value) -> Validation;
}

/// Outcome of [`StandardSchema::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Value(Value),
    Issues(Vec<Issue>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Value(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Validation::Value(v) => Some(v),
            Validation::Issues(_) => None,
        }
    }

    pub fn issues(&self) -> Option<&[Issue]> {
        match self {
            Validation::Value(_) => None,
            Validation::Issues(issues) => Some(issues),
        }
    }

    pub fn into_result(self) -> std::result::Result<Value, Vec<Issue>> {
        match self {
            Validation::Value(v) => Ok(v),
            Validation::Issues(issues) => Err(issues),
        }
    }
}
