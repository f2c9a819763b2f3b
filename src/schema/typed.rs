//! Serde adapter: a Rust type is its own schema.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::schema::{Issue, StandardSchema, Validation};

/// Validates by deserializing into `T`.
///
/// The validated value is `T` serialized back to JSON, so serde defaults and
/// renames are applied to what callers receive.
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Typed<{}>", std::any::type_name::<T>())
    }
}

impl<T> StandardSchema for Typed<T>
where
    T: DeserializeOwned + Serialize,
{
    fn vendor(&self) -> &str {
        "serde"
    }

    fn validate(&self, value: &Value) -> Validation {
        let typed: T = match T::deserialize(value) {
            Ok(t) => t,
            Err(e) => return Validation::Issues(vec![Issue::without_path(e.to_string())]),
        };
        match serde_json::to_value(&typed) {
            Ok(normalized) => Validation::Value(normalized),
            Err(e) => Validation::Issues(vec![Issue::without_path(e.to_string())]),
        }
    }
}
