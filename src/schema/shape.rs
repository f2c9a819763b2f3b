//! Plain shape descriptors compiled into JSON Schema.
//!
//! A descriptor is ordinary JSON:
//!
//! - an object describes an object; a key ending in `?` is optional
//! - an array describes a fixed-length tuple
//! - a string is a type expression: alternatives joined by `|`, each one a
//!   keyword (`string`, `number`, `integer`, `bigint`, `boolean`, `true`,
//!   `false`, `null`, `undefined`, `unknown`, `object`, `Record`, `Array`,
//!   `never`), a single-quoted literal such as `'admin'`, or either of those
//!   followed by `[]`
//!
//! An `undefined` alternative makes the surrounding key optional and accepts
//! `null`, since JSON has no undefined.

use serde_json::{json, Map, Value};

use crate::schema::{JsonSchema, StandardSchema, Validation};
use crate::{Error, Result};

/// A validator compiled from a shape descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSchema {
    descriptor: Value,
    schema: JsonSchema,
}

impl ShapeSchema {
    pub fn compile(descriptor: &Value) -> Result<Self> {
        let document = compile_value(descriptor)?.schema;
        Ok(Self {
            descriptor: descriptor.clone(),
            schema: JsonSchema::compile(document)?,
        })
    }

    pub fn descriptor(&self) -> &Value {
        &self.descriptor
    }

    /// The JSON Schema document the descriptor compiled to.
    pub fn json_schema(&self) -> &Value {
        self.schema.document()
    }
}

impl StandardSchema for ShapeSchema {
    fn vendor(&self) -> &str {
        "shape"
    }

    fn validate(&self, value: &Value) -> Validation {
        self.schema.validate(value)
    }
}

struct Compiled {
    schema: Value,
    /// An `undefined` alternative was present.
    optional: bool,
}

fn compile_value(descriptor: &Value) -> Result<Compiled> {
    match descriptor {
        Value::String(expr) => compile_expression(expr),
        Value::Object(fields) => Ok(Compiled {
            schema: compile_object(fields)?,
            optional: false,
        }),
        Value::Array(items) => {
            let items = items
                .iter()
                .map(|item| compile_value(item).map(|c| c.schema))
                .collect::<Result<Vec<_>>>()?;
            let len = items.len();
            // draft 7 requires a non-empty `items` array
            let schema = if items.is_empty() {
                json!({"type": "array", "maxItems": 0})
            } else {
                json!({
                    "type": "array",
                    "items": items,
                    "minItems": len,
                    "maxItems": len,
                })
            };
            Ok(Compiled {
                schema,
                optional: false,
            })
        }
        other => Err(invalid(format!(
            "shape descriptor entries must be strings, objects or arrays, got {}",
            other
        ))),
    }
}

fn compile_object(fields: &Map<String, Value>) -> Result<Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for (raw_key, descriptor) in fields {
        let (key, marked_optional) = match raw_key.strip_suffix('?') {
            Some(stripped) => (stripped, true),
            None => (raw_key.as_str(), false),
        };
        let compiled = compile_value(descriptor)?;
        if !(marked_optional || compiled.optional) {
            required.push(Value::String(key.to_string()));
        }
        properties.insert(key.to_string(), compiled.schema);
    }

    let mut schema = Map::new();
    schema.insert("type".into(), json!("object"));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), Value::Array(required));
    }
    Ok(Value::Object(schema))
}

fn compile_expression(expr: &str) -> Result<Compiled> {
    let mut optional = false;
    let mut alternatives = Vec::new();

    for part in split_alternatives(expr) {
        if part.is_empty() {
            return Err(invalid(format!("empty alternative in '{}'", expr)));
        }
        if part == "undefined" {
            optional = true;
        }
        alternatives.push(compile_alternative(part)?);
    }

    let schema = if alternatives.len() == 1 {
        alternatives.remove(0)
    } else {
        json!({ "anyOf": alternatives })
    };
    Ok(Compiled { schema, optional })
}

/// Split on `|` outside single-quoted literals.
fn split_alternatives(expr: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quote = false;
    let mut start = 0;
    for (i, c) in expr.char_indices() {
        match c {
            '\'' => in_quote = !in_quote,
            '|' if !in_quote => {
                parts.push(expr[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(expr[start..].trim());
    parts
}

fn compile_alternative(part: &str) -> Result<Value> {
    if let Some(literal) = part
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .filter(|inner| !inner.contains('\''))
    {
        return Ok(json!({ "const": literal }));
    }

    if let Some(element) = part.strip_suffix("[]") {
        let items = compile_alternative(element.trim_end())?;
        return Ok(json!({"type": "array", "items": items}));
    }

    let schema = match part {
        "string" => json!({"type": "string"}),
        "number" => json!({"type": "number"}),
        "integer" | "bigint" => json!({"type": "integer"}),
        "boolean" => json!({"type": "boolean"}),
        "true" => json!({"const": true}),
        "false" => json!({"const": false}),
        "null" | "undefined" => json!({"type": "null"}),
        "unknown" => json!({}),
        "never" => json!({"not": {}}),
        "object" | "Record" => json!({"type": "object"}),
        "Array" => json!({"type": "array"}),
        other => return Err(invalid(format!("unknown type keyword '{}'", other))),
    };
    Ok(schema)
}

fn invalid(message: String) -> Error {
    Error::InvalidSchemaArgument { message }
}
