//! Error types for the semantics engine and automaton simulator

use thiserror::Error;

/// Evaluation errors shared by every execution strategy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reference to a variable that has no binding
    ///
    /// **Triggered by:** `Variable("x")` evaluated, reduced or invoked
    /// against an environment without `x`
    /// **Prevention:** Assign the variable before reading it
    #[error("Unbound variable: {name}")]
    UnboundVariable {
        /// Variable name
        name: String,
    },

    /// Single-step reduction requested on a term already in normal form
    ///
    /// **Triggered by:** calling `reduce` on `<1>`, `<True>` or `<do-nothing>`
    /// **Prevention:** check `reducible()` first; the machines always do
    #[error("Cannot reduce {term}: term is already in normal form")]
    InvalidReduction {
        /// Rendering of the offending term
        term: String,
    },

    /// Operand of the wrong kind for an operator or condition
    ///
    /// **Triggered by:** `<<True> + <1>>`, or an `if`/`while` whose condition
    /// is a number
    #[error("Type error: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected value kind
        expected: String,
        /// Actual value kind
        got: String,
    },

    /// Deterministic automaton has no rule for the current input
    #[error("No transition from state {state} on {character:?}")]
    NoTransition {
        /// State the automaton was in
        state: u32,
        /// Input character that had no rule
        character: char,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Precondition violation inside the engine itself
    Fatal,
    /// Problem with the program or input being run
    Runtime,
}

impl Error {
    /// Create an unbound variable error
    pub fn unbound(name: impl Into<String>) -> Self {
        Error::UnboundVariable { name: name.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Error::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::InvalidReduction { .. } => ErrorSeverity::Fatal,
            Error::UnboundVariable { .. }
            | Error::TypeMismatch { .. }
            | Error::NoTransition { .. } => ErrorSeverity::Runtime,
        }
    }
}

/// Result type for semantics operations
pub type Result<T> = std::result::Result<T, Error>;
