use std::fmt;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Immutable variable environment
///
/// Every update returns a new environment and leaves the receiver alone.
/// Both collections are `im` persistent structures, so an update clones in
/// O(1) and shares every untouched binding with the original.
///
/// Insertion order is tracked only for rendering. Equality compares
/// bindings and ignores order.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Name to value bindings
    bindings: im::HashMap<String, Value>,
    /// Names in first-insertion order
    order: im::Vector<String>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value bound to `name`
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.get(name).ok_or_else(|| Error::unbound(name))
    }

    /// Gets the value bound to `name`, if any
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    /// Checks whether `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Returns a new environment where `name` maps to `value`
    ///
    /// A name that is already bound keeps its position; a new name goes last.
    #[must_use]
    pub fn with_binding(&self, name: impl Into<String>, value: Value) -> Self {
        let name = name.into();
        let mut order = self.order.clone();
        if !self.bindings.contains_key(&name) {
            order.push_back(name.clone());
        }
        Environment {
            bindings: self.bindings.update(name, value),
            order,
        }
    }

    /// Returns a new environment without a binding for `name`
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        let mut order = self.order.clone();
        if let Some(index) = order.iter().position(|bound| bound == name) {
            order.remove(index);
        }
        Environment {
            bindings: self.bindings.without(name),
            order,
        }
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.get(name).map(|value| (name.as_str(), value)))
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for Environment {}

impl<K: Into<String>> FromIterator<(K, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Environment::new(), |env, (name, value)| {
                env.with_binding(name, value)
            })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
