//! # simplesem - Three Semantics for a Minimal Imperative Language
//!
//! One abstract syntax, three independently implemented execution
//! strategies that always agree:
//!
//! - **Big-step** - [`evaluate_expression`] / [`evaluate_statement`] walk the
//!   tree recursively and return the final value or environment
//! - **Small-step** - [`Expression::reduce`] / [`Statement::reduce`] rewrite
//!   a term one step at a time; [`ExpressionMachine`] and
//!   [`StatementMachine`] drive them to normal form and print every state
//! - **Closures** - [`compiler::compile_expression`] /
//!   [`compiler::compile_statement`] translate a term into a host closure
//!   over the environment
//!
//! ## Quick Start
//!
//! ```rust
//! use simplesem::{Environment, Expression, Statement, StatementMachine, Value};
//!
//! # fn main() -> simplesem::Result<()> {
//! // x = 1; while (x < 5) { x = x * 3 }
//! let program = Statement::sequence(
//!     Statement::assign("x", Expression::number(1)),
//!     Statement::while_loop(
//!         Expression::less_than(Expression::variable("x"), Expression::number(5)),
//!         Statement::assign(
//!             "x",
//!             Expression::multiply(Expression::variable("x"), Expression::number(3)),
//!         ),
//!     ),
//! );
//!
//! // Big-step
//! let env = simplesem::evaluate_statement(&program, &Environment::new())?;
//! assert_eq!(env.lookup("x")?, Value::Number(9));
//!
//! // Small-step, collecting the trace instead of printing it
//! let mut machine = StatementMachine::new(program.clone());
//! let trace = machine.trace()?;
//! assert_eq!(trace.last().map(String::as_str), Some(r#"{"x": <9>}"#));
//!
//! // Compiled
//! let compiled = simplesem::compiler::compile_statement(&program);
//! assert_eq!(compiled.call(&Environment::new())?, env);
//! # Ok(())
//! # }
//! ```
//!
//! ## Trace Format
//!
//! Every node renders in angle brackets: `<1>`, `<True>`, `<x>`,
//! `<<1> + <2>>`, `<x = <1>>`, `<if <True>: <do-nothing> else: <do-nothing>>`,
//! `<<do-nothing>; <do-nothing>>`, `<while <False>: <do-nothing>>`.
//! Environments render as `{"x": <2>, "y": <4>}` in insertion order.
//!
//! ## Features
//!
//! - `automaton` (default) - the [`automaton`] module: DFA and NFA simulation
//!   over a rule table, independent of the semantics engine

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "automaton")]
pub mod automaton;
pub mod compiler;
pub mod error;
pub mod runtime;
pub mod syntax;

// Re-export main types
pub use compiler::{CompiledExpression, CompiledMachine, CompiledStatement};
pub use error::{Error, ErrorSeverity, Result};
pub use runtime::{
    evaluate_expression, evaluate_statement, Environment, ExpressionMachine, Machine, Outcome,
    Program, StatementMachine, Value,
};
pub use syntax::{Expression, Statement};
