//! Small-step (structural operational) semantics
//!
//! `reduce` performs exactly one rewrite, always on the leftmost innermost
//! reducible subterm. The machines repeat it until the term reaches normal
//! form and report every intermediate state.

use std::rc::Rc;

use crate::error::{Error, Result};
use crate::runtime::{Environment, Value};
use crate::syntax::{Expression, Statement};

type Rebuild = fn(Rc<Expression>, Rc<Expression>) -> Expression;
type Combine = fn(&Value, &Value) -> Result<Value>;

impl Expression {
    /// Returns true unless the expression is a literal
    pub fn reducible(&self) -> bool {
        !matches!(self, Expression::Number(_) | Expression::Boolean(_))
    }

    /// Performs one rewrite step
    ///
    /// Fails with [`Error::InvalidReduction`] on a literal.
    pub fn reduce(&self, env: &Environment) -> Result<Expression> {
        match self {
            Expression::Number(_) | Expression::Boolean(_) => Err(Error::InvalidReduction {
                term: self.to_string(),
            }),
            Expression::Variable(name) => env.lookup(name).map(Expression::from),
            Expression::Add(left, right) => {
                reduce_binary(left, right, env, Expression::Add, Value::plus)
            }
            Expression::Multiply(left, right) => {
                reduce_binary(left, right, env, Expression::Multiply, Value::times)
            }
            Expression::LessThan(left, right) => {
                reduce_binary(left, right, env, Expression::LessThan, Value::less_than)
            }
        }
    }
}

fn reduce_binary(
    left: &Rc<Expression>,
    right: &Rc<Expression>,
    env: &Environment,
    rebuild: Rebuild,
    combine: Combine,
) -> Result<Expression> {
    match (left.as_value(), right.as_value()) {
        (None, _) => Ok(rebuild(Rc::new(left.reduce(env)?), Rc::clone(right))),
        (Some(_), None) => Ok(rebuild(Rc::clone(left), Rc::new(right.reduce(env)?))),
        (Some(l), Some(r)) => combine(&l, &r).map(Expression::from),
    }
}

impl Statement {
    /// Returns true for everything except `<do-nothing>`
    pub fn reducible(&self) -> bool {
        !matches!(self, Statement::DoNothing)
    }

    /// Performs one rewrite step, returning the new statement and environment
    ///
    /// Fails with [`Error::InvalidReduction`] on `<do-nothing>`.
    pub fn reduce(&self, env: &Environment) -> Result<(Statement, Environment)> {
        match self {
            Statement::DoNothing => Err(Error::InvalidReduction {
                term: self.to_string(),
            }),

            Statement::Assign { name, expression } => match expression.as_value() {
                None => {
                    let reduced = Statement::Assign {
                        name: name.clone(),
                        expression: Rc::new(expression.reduce(env)?),
                    };
                    Ok((reduced, env.clone()))
                }
                Some(value) => Ok((Statement::DoNothing, env.with_binding(name.as_str(), value))),
            },

            Statement::If {
                condition,
                consequence,
                alternative,
            } => match condition.as_value() {
                None => {
                    let reduced = Statement::If {
                        condition: Rc::new(condition.reduce(env)?),
                        consequence: Rc::clone(consequence),
                        alternative: Rc::clone(alternative),
                    };
                    Ok((reduced, env.clone()))
                }
                Some(value) => {
                    let branch = if value.as_boolean()? {
                        consequence
                    } else {
                        alternative
                    };
                    Ok((Statement::clone(branch), env.clone()))
                }
            },

            Statement::Sequence { first, second } => {
                if **first == Statement::DoNothing {
                    return Ok((Statement::clone(second), env.clone()));
                }
                let (first, env) = first.reduce(env)?;
                let reduced = Statement::Sequence {
                    first: Rc::new(first),
                    second: Rc::clone(second),
                };
                Ok((reduced, env))
            }

            // One unrolling: the fresh While shares condition and body with this one.
            Statement::While { condition, body } => {
                let unrolled = Statement::If {
                    condition: Rc::clone(condition),
                    consequence: Rc::new(Statement::Sequence {
                        first: Rc::clone(body),
                        second: Rc::new(self.clone()),
                    }),
                    alternative: Rc::new(Statement::DoNothing),
                };
                Ok((unrolled, env.clone()))
            }
        }
    }
}

/// Steps an expression to normal form
#[derive(Debug, Clone)]
pub struct ExpressionMachine {
    expression: Expression,
    env: Environment,
    steps: usize,
}

impl ExpressionMachine {
    /// Creates a machine with an empty environment
    pub fn new(expression: Expression) -> Self {
        Self::with_env(expression, Environment::new())
    }

    /// Creates a machine that reads variables from `env`
    pub fn with_env(expression: Expression, env: Environment) -> Self {
        ExpressionMachine {
            expression,
            env,
            steps: 0,
        }
    }

    /// Current term
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Environment variables are read from
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Number of steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Final value, once the term is in normal form
    pub fn value(&self) -> Option<Value> {
        self.expression.as_value()
    }

    /// Performs one reduction
    pub fn step(&mut self) -> Result<()> {
        let next = self.expression.reduce(&self.env)?;
        self.steps += 1;
        tracing::trace!(step = self.steps, from = %self.expression, to = %next, "reduce expression");
        self.expression = next;
        Ok(())
    }

    /// Runs to normal form, emitting the term before every step and once at the end
    pub fn run_with(&mut self, mut emit: impl FnMut(String)) -> Result<()> {
        tracing::debug!(expression = %self.expression, "small-step expression run");
        while self.expression.reducible() {
            emit(self.expression.to_string());
            self.step()?;
        }
        emit(self.expression.to_string());
        Ok(())
    }

    /// Runs to normal form, printing the trace to stdout
    pub fn run(&mut self) -> Result<()> {
        self.run_with(|line| println!("{}", line))
    }

    /// Runs to normal form and returns the trace lines
    pub fn trace(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.run_with(|line| lines.push(line))?;
        Ok(lines)
    }
}

/// Steps a statement to `<do-nothing>`, threading the environment
#[derive(Debug, Clone)]
pub struct StatementMachine {
    statement: Statement,
    env: Environment,
    steps: usize,
}

impl StatementMachine {
    /// Creates a machine with an empty environment
    pub fn new(statement: Statement) -> Self {
        Self::with_env(statement, Environment::new())
    }

    /// Creates a machine starting from `env`
    pub fn with_env(statement: Statement, env: Environment) -> Self {
        StatementMachine {
            statement,
            env,
            steps: 0,
        }
    }

    /// Current term
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Current environment
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Number of steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Performs one reduction
    pub fn step(&mut self) -> Result<()> {
        let (next, env) = self.statement.reduce(&self.env)?;
        self.steps += 1;
        tracing::trace!(step = self.steps, from = %self.statement, to = %next, "reduce statement");
        self.statement = next;
        self.env = env;
        Ok(())
    }

    /// Runs to normal form, emitting term and environment before every step
    /// and both once more at the end
    pub fn run_with(&mut self, mut emit: impl FnMut(String)) -> Result<()> {
        tracing::debug!(statement = %self.statement, env = %self.env, "small-step statement run");
        while self.statement.reducible() {
            emit(self.statement.to_string());
            emit(self.env.to_string());
            self.step()?;
        }
        emit(self.statement.to_string());
        emit(self.env.to_string());
        Ok(())
    }

    /// Runs to normal form, printing the trace to stdout
    pub fn run(&mut self) -> Result<()> {
        self.run_with(|line| println!("{}", line))
    }

    /// Runs to normal form and returns the trace lines
    pub fn trace(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.run_with(|line| lines.push(line))?;
        Ok(lines)
    }
}
