use crate::value::ContextValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derived physical properties of a residence, keyed by variable name.
///
/// The context is produced by the geometry-derivation step of the calling
/// application (dimensions → surface areas, counts) and is treated as
/// read-only for the duration of an evaluation. Nesting is limited to one
/// level: namespaces such as `woningSpecifiek` and `dimensions` hold plain
/// values, never further namespaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CalculationContext {
    values: HashMap<String, ContextValue>,
}

impl CalculationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the context holds no properties at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of top-level properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Insert or replace a top-level property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Top-level property lookup.
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// True when a top-level property with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Lookup inside a nested namespace such as `woningSpecifiek`.
    ///
    /// Returns `None` when the namespace is absent, is not an object, or
    /// does not hold the key.
    pub fn get_nested(&self, namespace: &str, key: &str) -> Option<&ContextValue> {
        self.values.get(namespace)?.as_object()?.get(key)
    }

    /// Build a context from a JSON document as stored for a residence.
    ///
    /// Non-object documents yield an empty context, which downstream code
    /// reports as the normal "nothing to compute" condition.
    pub fn from_json(document: &serde_json::Value) -> Self {
        match document {
            serde_json::Value::Object(map) => Self {
                values: map
                    .iter()
                    .map(|(k, v)| (k.clone(), ContextValue::from_json(v)))
                    .collect(),
            },
            _ => Self::default(),
        }
    }
}

impl From<HashMap<String, ContextValue>> for CalculationContext {
    fn from(values: HashMap<String, ContextValue>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, ContextValue)> for CalculationContext {
    fn from_iter<I: IntoIterator<Item = (String, ContextValue)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}
