//! Environment snapshots handed to entry points
//!
//! Entry points read variables through an [`Environment`] instead of
//! `std::env`, so each invocation sees exactly the overrides it was given.

use crate::error::HarnessError;
use std::collections::BTreeMap;

/// Variable overrides, optionally layered over the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `Some` sets a value, `None` hides any inherited value
    vars: BTreeMap<String, Option<String>>,
    /// Fall through to the process environment on a miss
    inherit: bool,
}

impl Environment {
    /// Create an empty environment that sees nothing from the process
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment backed by the real process environment
    pub fn from_process() -> Self {
        Self {
            vars: BTreeMap::new(),
            inherit: true,
        }
    }

    /// Set a variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), Some(value.into()));
        self
    }

    /// Hide a variable, including one inherited from the process
    pub fn unset(&mut self, key: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), None);
        self
    }

    /// Builder-style [`Environment::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style inherit toggle
    pub fn inheriting(mut self, inherit: bool) -> Self {
        self.inherit = inherit;
        self
    }

    /// Whether lookups fall through to the process environment
    pub fn inherits(&self) -> bool {
        self.inherit
    }

    /// Look up a variable
    pub fn var(&self, key: &str) -> Option<String> {
        match self.vars.get(key) {
            Some(value) => value.clone(),
            None if self.inherit => std::env::var(key).ok(),
            None => None,
        }
    }

    /// Look up a variable, treating an empty value as unset
    pub fn var_non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }

    /// Iterate over the explicit overrides
    pub fn overrides(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Layer `other` on top of `self`; `other` wins on conflicts
    pub fn overlay(&self, other: &Environment) -> Environment {
        let mut merged = self.clone();
        for (key, value) in &other.vars {
            merged.vars.insert(key.clone(), value.clone());
        }
        merged.inherit = self.inherit || other.inherit;
        merged
    }

    /// Reject names and values no real process environment could carry
    pub fn validate(&self) -> Result<(), HarnessError> {
        for (key, value) in &self.vars {
            let reason = if key.is_empty() {
                Some("name is empty")
            } else if key.contains('=') {
                Some("name contains '='")
            } else if key.contains('\0') {
                Some("name contains NUL")
            } else if value.as_deref().is_some_and(|v| v.contains('\0')) {
                Some("value contains NUL")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(HarnessError::InvalidEnvironment {
                    key: key.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}
