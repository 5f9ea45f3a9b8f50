//! Big-step (natural) semantics
//!
//! A plain recursive walker: an expression goes straight to its value and a
//! statement straight to the environment it leaves behind.

use crate::error::Result;
use crate::runtime::{Environment, Value};
use crate::syntax::{Expression, Statement};

/// Evaluates an expression to its value
///
/// Binary operands are evaluated left first, so the left operand's error
/// wins when both sides fail.
pub fn evaluate_expression(expr: &Expression, env: &Environment) -> Result<Value> {
    match expr {
        Expression::Number(n) => Ok(Value::Number(*n)),
        Expression::Boolean(b) => Ok(Value::Boolean(*b)),
        Expression::Variable(name) => env.lookup(name),
        Expression::Add(left, right) => {
            let left = evaluate_expression(left, env)?;
            let right = evaluate_expression(right, env)?;
            left.plus(&right)
        }
        Expression::Multiply(left, right) => {
            let left = evaluate_expression(left, env)?;
            let right = evaluate_expression(right, env)?;
            left.times(&right)
        }
        Expression::LessThan(left, right) => {
            let left = evaluate_expression(left, env)?;
            let right = evaluate_expression(right, env)?;
            left.less_than(&right)
        }
    }
}

/// Executes a statement, returning the resulting environment
pub fn evaluate_statement(stmt: &Statement, env: &Environment) -> Result<Environment> {
    match stmt {
        Statement::DoNothing => Ok(env.clone()),

        Statement::Assign { name, expression } => {
            let value = evaluate_expression(expression, env)?;
            Ok(env.with_binding(name.as_str(), value))
        }

        Statement::If {
            condition,
            consequence,
            alternative,
        } => {
            if evaluate_expression(condition, env)?.as_boolean()? {
                evaluate_statement(consequence, env)
            } else {
                evaluate_statement(alternative, env)
            }
        }

        Statement::Sequence { first, second } => {
            let env = evaluate_statement(first, env)?;
            evaluate_statement(second, &env)
        }

        // Iterative rather than tail-recursive so long loops keep a flat stack.
        Statement::While { condition, body } => {
            let mut env = env.clone();
            while evaluate_expression(condition, &env)?.as_boolean()? {
                env = evaluate_statement(body, &env)?;
            }
            Ok(env)
        }
    }
}

/// Program accepted by the evaluation machines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Program {
    /// A single expression, evaluated to a value
    Expression(Expression),
    /// A statement, executed for its environment
    Statement(Statement),
}

impl From<Expression> for Program {
    fn from(expr: Expression) -> Self {
        Program::Expression(expr)
    }
}

impl From<Statement> for Program {
    fn from(stmt: Statement) -> Self {
        Program::Statement(stmt)
    }
}

/// Final result of running a [`Program`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Value of an expression program
    Value(Value),
    /// Environment left by a statement program
    Environment(Environment),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{}", value),
            Outcome::Environment(env) => write!(f, "{}", env),
        }
    }
}

/// Big-step driver
///
/// Exposes no intermediate state: [`Machine::run`] prints one line, the
/// rendering of the final value or environment.
#[derive(Debug, Clone)]
pub struct Machine {
    program: Program,
    env: Environment,
}

impl Machine {
    /// Creates a machine with an empty environment
    pub fn new(program: impl Into<Program>) -> Self {
        Self::with_env(program, Environment::new())
    }

    /// Creates a machine starting from `env`
    pub fn with_env(program: impl Into<Program>, env: Environment) -> Self {
        Machine {
            program: program.into(),
            env,
        }
    }

    /// Evaluates the program without printing
    pub fn result(&self) -> Result<Outcome> {
        match &self.program {
            Program::Expression(expr) => evaluate_expression(expr, &self.env).map(Outcome::Value),
            Program::Statement(stmt) => {
                evaluate_statement(stmt, &self.env).map(Outcome::Environment)
            }
        }
    }

    /// Evaluates the program and hands the single result line to `emit`
    pub fn run_with(&self, mut emit: impl FnMut(String)) -> Result<Outcome> {
        tracing::debug!(program = ?self.program, "big-step run");
        let outcome = self.result()?;
        emit(outcome.to_string());
        Ok(outcome)
    }

    /// Evaluates the program and prints the result to stdout
    pub fn run(&self) -> Result<Outcome> {
        self.run_with(|line| println!("{}", line))
    }
}
