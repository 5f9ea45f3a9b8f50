use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::runtime::{Environment, Value};
use crate::syntax::{Expression, Statement};

type Combine = fn(&Value, &Value) -> Result<Value>;

/// Compiled expression: a deferred computation from environment to value
#[derive(Clone)]
pub struct CompiledExpression(Rc<dyn Fn(&Environment) -> Result<Value>>);

/// Compiled statement: a deferred computation from environment to environment
#[derive(Clone)]
pub struct CompiledStatement(Rc<dyn Fn(&Environment) -> Result<Environment>>);

impl CompiledExpression {
    fn new(f: impl Fn(&Environment) -> Result<Value> + 'static) -> Self {
        CompiledExpression(Rc::new(f))
    }

    /// Runs the computation against `env`
    pub fn call(&self, env: &Environment) -> Result<Value> {
        (self.0)(env)
    }
}

impl CompiledStatement {
    fn new(f: impl Fn(&Environment) -> Result<Environment> + 'static) -> Self {
        CompiledStatement(Rc::new(f))
    }

    /// Runs the computation against `env`, returning the new environment
    pub fn call(&self, env: &Environment) -> Result<Environment> {
        (self.0)(env)
    }
}

impl fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("CompiledExpression(..)")
    }
}

impl fmt::Debug for CompiledStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("CompiledStatement(..)")
    }
}

/// Translates an expression into a closure over the environment
pub fn compile_expression(expr: &Expression) -> CompiledExpression {
    match expr {
        Expression::Number(n) => {
            let value = Value::Number(*n);
            CompiledExpression::new(move |_| Ok(value))
        }
        Expression::Boolean(b) => {
            let value = Value::Boolean(*b);
            CompiledExpression::new(move |_| Ok(value))
        }
        Expression::Variable(name) => {
            let name = name.clone();
            CompiledExpression::new(move |env| env.lookup(&name))
        }
        Expression::Add(left, right) => compile_binary(left, right, Value::plus),
        Expression::Multiply(left, right) => compile_binary(left, right, Value::times),
        Expression::LessThan(left, right) => compile_binary(left, right, Value::less_than),
    }
}

fn compile_binary(left: &Expression, right: &Expression, combine: Combine) -> CompiledExpression {
    let left = compile_expression(left);
    let right = compile_expression(right);
    CompiledExpression::new(move |env| {
        let left = left.call(env)?;
        let right = right.call(env)?;
        combine(&left, &right)
    })
}

/// Translates a statement into a closure from environment to environment
///
/// An assignment drops any existing binding and appends the new one, so a
/// reassigned variable moves to the end of the environment's order. Values
/// always match the interpreters; only the rendering order can differ.
pub fn compile_statement(stmt: &Statement) -> CompiledStatement {
    match stmt {
        Statement::DoNothing => CompiledStatement::new(|env| Ok(env.clone())),

        Statement::Assign { name, expression } => {
            let name = name.clone();
            let expression = compile_expression(expression);
            CompiledStatement::new(move |env| {
                let value = expression.call(env)?;
                Ok(env.without(&name).with_binding(name.as_str(), value))
            })
        }

        Statement::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = compile_expression(condition);
            let consequence = compile_statement(consequence);
            let alternative = compile_statement(alternative);
            CompiledStatement::new(move |env| {
                if condition.call(env)?.as_boolean()? {
                    consequence.call(env)
                } else {
                    alternative.call(env)
                }
            })
        }

        Statement::Sequence { first, second } => {
            let first = compile_statement(first);
            let second = compile_statement(second);
            CompiledStatement::new(move |env| second.call(&first.call(env)?))
        }

        Statement::While { condition, body } => {
            let condition = compile_expression(condition);
            let body = compile_statement(body);
            CompiledStatement::new(move |env| {
                let mut bounce = loop_once(&condition, &body, env)?;
                loop {
                    match bounce {
                        Bounce::Again(next) => bounce = loop_once(&condition, &body, &next)?,
                        Bounce::Done(env) => return Ok(env),
                    }
                }
            })
        }
    }
}

/// Outcome of one pass through a compiled loop
enum Bounce {
    /// Body ran; re-enter the loop with this environment
    Again(Environment),
    /// Condition was false; the loop leaves this environment
    Done(Environment),
}

/// One pass of the compiled loop. Instead of calling itself after the body,
/// it hands back the continuation so the driver keeps a flat stack.
fn loop_once(
    condition: &CompiledExpression,
    body: &CompiledStatement,
    env: &Environment,
) -> Result<Bounce> {
    if condition.call(env)?.as_boolean()? {
        Ok(Bounce::Again(body.call(env)?))
    } else {
        Ok(Bounce::Done(env.clone()))
    }
}
