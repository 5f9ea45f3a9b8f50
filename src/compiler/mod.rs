//! # Closure compiler
//!
//! Translates expressions and statements into host closures once, up front.
//! Running the result against an environment reproduces what the big-step
//! evaluator computes, without walking the syntax tree again.
//!
//! ```text
//! AST → compile_* → Compiled{Expression,Statement} → call(env) → Value / Environment
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use simplesem::compiler::compile_statement;
//! use simplesem::{Environment, Expression, Statement, Value};
//!
//! let program = Statement::assign("x", Expression::add(Expression::number(1), Expression::number(2)));
//! let env = compile_statement(&program).call(&Environment::new())?;
//! assert_eq!(env.lookup("x")?, Value::Number(3));
//! # Ok::<(), simplesem::Error>(())
//! ```

mod closure;

pub use closure::{compile_expression, compile_statement, CompiledExpression, CompiledStatement};

use crate::runtime::{Environment, Outcome, Program};
use crate::Result;

/// Compiled form of a [`Program`]
#[derive(Debug, Clone)]
pub enum CompiledProgram {
    /// Compiled expression program
    Expression(CompiledExpression),
    /// Compiled statement program
    Statement(CompiledStatement),
}

/// Compiles a program
pub fn compile(program: &Program) -> CompiledProgram {
    match program {
        Program::Expression(expr) => CompiledProgram::Expression(compile_expression(expr)),
        Program::Statement(stmt) => CompiledProgram::Statement(compile_statement(stmt)),
    }
}

/// Driver for compiled programs
///
/// Like the big-step machine, [`CompiledMachine::run`] prints a single line
/// with the final value or environment.
#[derive(Debug, Clone)]
pub struct CompiledMachine {
    program: CompiledProgram,
    env: Environment,
}

impl CompiledMachine {
    /// Compiles `program` to run against an empty environment
    pub fn new(program: impl Into<Program>) -> Self {
        Self::with_env(program, Environment::new())
    }

    /// Compiles `program` to run against `env`
    pub fn with_env(program: impl Into<Program>, env: Environment) -> Self {
        let program = program.into();
        tracing::debug!(program = ?program, "compiling program");
        CompiledMachine {
            program: compile(&program),
            env,
        }
    }

    /// Invokes the compiled program without printing
    pub fn result(&self) -> Result<Outcome> {
        match &self.program {
            CompiledProgram::Expression(expr) => expr.call(&self.env).map(Outcome::Value),
            CompiledProgram::Statement(stmt) => stmt.call(&self.env).map(Outcome::Environment),
        }
    }

    /// Invokes the compiled program and hands the result line to `emit`
    pub fn run_with(&self, mut emit: impl FnMut(String)) -> Result<Outcome> {
        let outcome = self.result()?;
        emit(outcome.to_string());
        Ok(outcome)
    }

    /// Invokes the compiled program and prints the result to stdout
    pub fn run(&self) -> Result<Outcome> {
        self.run_with(|line| println!("{}", line))
    }
}
