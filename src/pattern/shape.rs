use serde_json::{Map, Value};

use crate::pattern::token::Token;
use crate::pattern::PathPattern;
use crate::schema::{ShapeSchema, StandardSchema, Validation};
use crate::Result;

/// Descriptor type for a parameter that must be present.
const REQUIRED: &str = "string";
/// Descriptor type for a parameter declared inside an optional group.
const OPTIONAL: &str = "string | undefined";

/// One parameter of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamEntry {
    pub name: String,
    pub required: bool,
}

/// Parameter name to requiredness, in order of first appearance.
///
/// A name seen more than once keeps its first position but takes the
/// requiredness of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamShape {
    entries: Vec<ParamEntry>,
}

impl ParamShape {
    pub(crate) fn from_tokens(tokens: &[Token]) -> Self {
        let mut shape = Self::default();
        for token in tokens {
            shape.collect(token, false);
        }
        shape
    }

    fn collect(&mut self, token: &Token, in_group: bool) {
        match token {
            Token::Param { name } | Token::Wildcard { name } => self.record(name, !in_group),
            Token::Group(inner) => {
                for nested in inner {
                    self.collect(nested, true);
                }
            }
            Token::Static(_) => {}
        }
    }

    fn record(&mut self, name: &str, required: bool) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.required = required,
            None => self.entries.push(ParamEntry {
                name: name.to_string(),
                required,
            }),
        }
    }

    pub fn entries(&self) -> &[ParamEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.required)
    }

    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.required)
            .map(|e| e.name.as_str())
    }

    pub fn optional(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.required)
            .map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shape descriptor accepted by [`ShapeSchema::compile`].
    pub fn descriptor(&self) -> Value {
        let mut map = Map::new();
        for entry in &self.entries {
            let ty = if entry.required { REQUIRED } else { OPTIONAL };
            map.insert(entry.name.clone(), Value::String(ty.to_string()));
        }
        Value::Object(map)
    }
}

/// Validator for the path parameters of one template.
#[derive(Debug, Clone)]
pub struct ParamSchema {
    shape: ParamShape,
    schema: ShapeSchema,
}

impl ParamSchema {
    pub(crate) fn from_pattern(pattern: &PathPattern) -> Result<Self> {
        let shape = pattern.shape();
        let schema = ShapeSchema::compile(&shape.descriptor())?;
        Ok(Self { shape, schema })
    }

    pub fn shape(&self) -> &ParamShape {
        &self.shape
    }

    pub fn descriptor(&self) -> &Value {
        self.schema.descriptor()
    }

    pub fn json_schema(&self) -> &Value {
        self.schema.json_schema()
    }
}

impl PartialEq for ParamSchema {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.schema == other.schema
    }
}

impl StandardSchema for ParamSchema {
    fn vendor(&self) -> &str {
        self.schema.vendor()
    }

    fn validate(&self, value: &Value) -> Validation {
        self.schema.validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse;

    fn shape_of(template: &str) -> ParamShape {
        parse(template).unwrap().shape()
    }

    #[test]
    fn required_params_only() {
        let shape = shape_of("/users/:userId/posts/:postId");
        assert_eq!(shape.get("userId"), Some(true));
        assert_eq!(shape.get("postId"), Some(true));
        assert_eq!(shape.optional().count(), 0);
    }

    #[test]
    fn params_inside_any_group_depth_are_optional() {
        let shape = shape_of("/a/:a{/:b{/:c}}");
        assert_eq!(shape.required().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(shape.optional().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn wildcard_is_a_parameter() {
        let shape = shape_of("/files/*filepath");
        assert_eq!(
            shape.entries(),
            &[ParamEntry {
                name: "filepath".to_string(),
                required: true
            }]
        );
    }

    #[test]
    fn last_occurrence_decides_requiredness() {
        let grouped_last = shape_of("/:id{/:id}");
        assert_eq!(grouped_last.get("id"), Some(false));
        assert_eq!(grouped_last.len(), 1);

        let plain_last = shape_of("{/:id}/:id");
        assert_eq!(plain_last.get("id"), Some(true));
    }

    #[test]
    fn descriptor_uses_shape_keywords() {
        let shape = shape_of("/users/:userId/posts{/:postId}");
        assert_eq!(
            shape.descriptor(),
            serde_json::json!({"userId": "string", "postId": "string | undefined"})
        );
    }
}
