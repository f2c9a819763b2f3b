//! Pairing of success and error schemas for a route.

use std::sync::Arc;

use serde_json::Value;

use crate::schema::{AbsentSchema, JsonSchema, ShapeSchema, StandardSchema, Typed};
use crate::{Error, Result};

/// A schema argument: either a ready validator or a shape descriptor to compile.
#[derive(Debug, Clone)]
pub enum SchemaArg {
    Schema(Arc<dyn StandardSchema>),
    Shape(Value),
}

impl SchemaArg {
    pub fn schema(schema: impl StandardSchema + 'static) -> Self {
        SchemaArg::Schema(Arc::new(schema))
    }

    pub fn shape(descriptor: Value) -> Self {
        SchemaArg::Shape(descriptor)
    }
}

impl From<Arc<dyn StandardSchema>> for SchemaArg {
    fn from(schema: Arc<dyn StandardSchema>) -> Self {
        SchemaArg::Schema(schema)
    }
}

impl From<Value> for SchemaArg {
    fn from(descriptor: Value) -> Self {
        SchemaArg::Shape(descriptor)
    }
}

macro_rules! impl_schema_arg_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for SchemaArg {
                fn from(schema: $ty) -> Self {
                    SchemaArg::schema(schema)
                }
            }
        )*
    };
}

impl_schema_arg_from!(JsonSchema, ShapeSchema, AbsentSchema);

impl<T> From<Typed<T>> for SchemaArg
where
    T: serde::de::DeserializeOwned + serde::Serialize + 'static,
{
    fn from(schema: Typed<T>) -> Self {
        SchemaArg::schema(schema)
    }
}

/// Success and error validators of one route.
#[derive(Debug, Clone)]
pub struct ResultSchema {
    data: Arc<dyn StandardSchema>,
    error: Arc<dyn StandardSchema>,
}

impl ResultSchema {
    pub fn data(&self) -> &dyn StandardSchema {
        self.data.as_ref()
    }

    pub fn error(&self) -> &dyn StandardSchema {
        self.error.as_ref()
    }
}

/// Build a [`ResultSchema`] from a data schema and an optional error schema.
///
/// Shape descriptors are compiled with [`ShapeSchema`]. Without an error
/// schema (or with a `null` descriptor) error bodies must be `null`.
///
/// ```
/// use exter::schema::{result, StandardSchema};
/// use serde_json::json;
///
/// let schemas = result(json!({"id": "number"}), Some(json!({"message": "string"}).into())).unwrap();
/// assert_eq!(schemas.data().vendor(), "shape");
///
/// assert!(result(json!("string"), None).is_err());
/// ```
pub fn result(data: impl Into<SchemaArg>, error: Option<SchemaArg>) -> Result<ResultSchema> {
    let data: Arc<dyn StandardSchema> = match data.into() {
        SchemaArg::Schema(schema) => schema,
        SchemaArg::Shape(descriptor) if is_schema_like(&descriptor) => {
            Arc::new(ShapeSchema::compile(&descriptor)?)
        }
        SchemaArg::Shape(_) => {
            return Err(Error::InvalidSchemaArgument {
                message: "Data must be an object or a schema.".to_string(),
            })
        }
    };

    let error: Arc<dyn StandardSchema> = match error {
        None | Some(SchemaArg::Shape(Value::Null)) => Arc::new(AbsentSchema),
        Some(SchemaArg::Schema(schema)) => schema,
        Some(SchemaArg::Shape(descriptor)) if is_schema_like(&descriptor) => {
            Arc::new(ShapeSchema::compile(&descriptor)?)
        }
        Some(SchemaArg::Shape(_)) => {
            return Err(Error::InvalidSchemaArgument {
                message: "Error must be an object or a schema.".to_string(),
            })
        }
    };

    Ok(ResultSchema { data, error })
}

fn is_schema_like(descriptor: &Value) -> bool {
    descriptor.is_object() || descriptor.is_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_error_schema_to_absent() {
        let schemas = result(json!({"id": "number"}), None).unwrap();
        assert_eq!(schemas.error().vendor(), "absent");
        assert!(schemas.error().validate(&Value::Null).is_valid());
        assert!(!schemas.error().validate(&json!({"message": "x"})).is_valid());
    }

    #[test]
    fn null_error_descriptor_counts_as_absent() {
        let schemas = result(json!({"id": "number"}), Some(Value::Null.into())).unwrap();
        assert_eq!(schemas.error().vendor(), "absent");
    }

    #[test]
    fn keeps_ready_validators() {
        let schemas = result(
            Typed::<serde_json::Map<String, Value>>::new(),
            Some(JsonSchema::compile(json!({"type": "object"})).unwrap().into()),
        )
        .unwrap();
        assert_eq!(schemas.data().vendor(), "serde");
        assert_eq!(schemas.error().vendor(), "jsonschema");
    }

    #[test]
    fn array_data_descriptors_are_accepted() {
        let empty = result(json!([]), None).unwrap();
        assert!(empty.data().validate(&json!([])).is_valid());

        let pair = result(json!(["string", "number"]), None).unwrap();
        assert!(pair.data().validate(&json!(["a", 1])).is_valid());
    }

    #[test]
    fn rejects_scalar_data_descriptor() {
        let err = result(json!(42), None).unwrap_err();
        assert!(matches!(err, Error::InvalidSchemaArgument { .. }));
        assert!(err.to_string().contains("Data must be an object or a schema."));
    }

    #[test]
    fn rejects_scalar_error_descriptor() {
        let err = result(json!({}), Some(json!("string").into())).unwrap_err();
        assert!(err.to_string().contains("Error must be an object or a schema."));
    }

    #[test]
    fn empty_object_error_schema_accepts_any_object() {
        let schemas = result(json!({"id": "number"}), Some(json!({}).into())).unwrap();
        assert!(schemas.error().validate(&json!({"anything": 1})).is_valid());
    }
}
