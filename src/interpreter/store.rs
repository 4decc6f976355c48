use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Mapping from variable name to the value it was last assigned.
///
/// Entries are created or overwritten by assignments and never removed.
/// Iteration order is unspecified; use [`VariableStore::sorted`] when a
/// stable order is needed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    variables: HashMap<String, Value>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`, if it was ever assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name`, returning the value it replaced.
    ///
    /// The previous type of the variable does not matter: an integer
    /// variable may be overwritten with a float and vice versa.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of distinct variables assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns all `(name, value)` pairs sorted by name.
    ///
    /// # Example
    /// ```
    /// use numscript::interpreter::{store::VariableStore, value::Value};
    ///
    /// let mut store = VariableStore::new();
    /// store.set("b", Value::Integer(2));
    /// store.set("a", Value::Float(1.5));
    ///
    /// assert_eq!(store.sorted(),
    ///            vec![("a", Value::Float(1.5)), ("b", Value::Integer(2))]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, Value)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        pairs
    }
}
