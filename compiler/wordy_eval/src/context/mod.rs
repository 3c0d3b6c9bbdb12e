//! Variable bindings for one run.
//!
//! The runner owns the context and lends it to the interpreter by `&mut` for
//! the duration of a run. Nodes never hold on to it.

use rustc_hash::FxHashMap;

use crate::errors::{undefined_variable, EvalResult};

/// Mutable store from variable name to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvalContext {
    variables: FxHashMap<String, f64>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style binding, for setting up initial state.
    #[must_use]
    pub fn with_binding(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Look up a variable, failing if it has never been assigned.
    pub fn lookup(&self, name: &str) -> EvalResult {
        self.get(name).ok_or_else(|| undefined_variable(name))
    }

    /// Bind `name` to `value`, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variables.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    /// Bindings sorted by name.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<_> = self.iter().collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EvalContext {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
