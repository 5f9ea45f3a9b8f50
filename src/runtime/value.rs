use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Runtime value representation
///
/// The only two terminal results of evaluation. Arithmetic is unchecked:
/// overflow wraps instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// 64-bit integer value
    Number(i64),
    /// Boolean value
    Boolean(bool),
}

impl Value {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
        }
    }

    /// Extracts the integer, failing on a boolean
    pub fn as_number(&self) -> Result<i64> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(Error::type_mismatch("number", other.type_name())),
        }
    }

    /// Extracts the boolean, failing on a number
    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(Error::type_mismatch("boolean", other.type_name())),
        }
    }

    /// `self + other`
    pub fn plus(&self, other: &Value) -> Result<Value> {
        Ok(Value::Number(self.as_number()?.wrapping_add(other.as_number()?)))
    }

    /// `self * other`
    pub fn times(&self, other: &Value) -> Result<Value> {
        Ok(Value::Number(self.as_number()?.wrapping_mul(other.as_number()?)))
    }

    /// `self < other`
    pub fn less_than(&self, other: &Value) -> Result<Value> {
        Ok(Value::Boolean(self.as_number()? < other.as_number()?))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "<{}>", n),
            Value::Boolean(true) => write!(f, "<True>"),
            Value::Boolean(false) => write!(f, "<False>"),
        }
    }
}
