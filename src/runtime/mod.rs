//! Runtime model and the two interpreting strategies
//!
//! [`big_step`] evaluates a term in one recursive call; [`small_step`]
//! rewrites it one step at a time. Both share [`Value`] and [`Environment`]
//! and never call each other.

pub mod big_step;
mod environment;
pub mod small_step;
mod value;

pub use big_step::{evaluate_expression, evaluate_statement, Machine, Outcome, Program};
pub use environment::Environment;
pub use small_step::{ExpressionMachine, StatementMachine};
pub use value::Value;
