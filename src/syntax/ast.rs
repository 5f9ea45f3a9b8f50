use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use crate::runtime::Value;

/// Expressions
///
/// Children are shared immutable references, so rewriting a node only
/// allocates along the path that changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression {
    /// Integer literal
    Number(i64),
    /// Boolean literal
    Boolean(bool),
    /// Variable reference
    Variable(String),
    /// Sum of two expressions
    Add(Rc<Expression>, Rc<Expression>),
    /// Product of two expressions
    Multiply(Rc<Expression>, Rc<Expression>),
    /// Strict less-than comparison
    LessThan(Rc<Expression>, Rc<Expression>),
}

/// Statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// Empty statement, the normal form of every statement
    DoNothing,

    /// Variable assignment: `name = expression`
    Assign {
        /// Name of the variable to bind
        name: String,
        /// Expression whose value is bound
        expression: Rc<Expression>,
    },

    /// Two-armed conditional
    If {
        /// Condition, must evaluate to a boolean
        condition: Rc<Expression>,
        /// Statement run when the condition is true
        consequence: Rc<Statement>,
        /// Statement run when the condition is false
        alternative: Rc<Statement>,
    },

    /// Run `first`, then `second` in the resulting environment
    Sequence {
        /// Statement run first
        first: Rc<Statement>,
        /// Statement run second
        second: Rc<Statement>,
    },

    /// While loop
    While {
        /// Loop condition, re-evaluated before every iteration
        condition: Rc<Expression>,
        /// Loop body
        body: Rc<Statement>,
    },
}

impl Expression {
    /// Creates a number literal
    pub fn number(value: i64) -> Self {
        Expression::Number(value)
    }

    /// Creates a boolean literal
    pub fn boolean(value: bool) -> Self {
        Expression::Boolean(value)
    }

    /// Creates a variable reference
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    /// Creates `<left + right>`
    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(Rc::new(left), Rc::new(right))
    }

    /// Creates `<left * right>`
    pub fn multiply(left: Expression, right: Expression) -> Self {
        Expression::Multiply(Rc::new(left), Rc::new(right))
    }

    /// Creates `<left < right>`
    pub fn less_than(left: Expression, right: Expression) -> Self {
        Expression::LessThan(Rc::new(left), Rc::new(right))
    }

    /// Returns the literal's value, or `None` for any compound expression
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Expression::Number(n) => Some(Value::Number(*n)),
            Expression::Boolean(b) => Some(Value::Boolean(*b)),
            _ => None,
        }
    }
}

impl Statement {
    /// Creates `<name = expression>`
    pub fn assign(name: impl Into<String>, expression: Expression) -> Self {
        Statement::Assign {
            name: name.into(),
            expression: Rc::new(expression),
        }
    }

    /// Creates `<if condition: consequence else: alternative>`
    pub fn if_else(condition: Expression, consequence: Statement, alternative: Statement) -> Self {
        Statement::If {
            condition: Rc::new(condition),
            consequence: Rc::new(consequence),
            alternative: Rc::new(alternative),
        }
    }

    /// Creates `<first; second>`
    pub fn sequence(first: Statement, second: Statement) -> Self {
        Statement::Sequence {
            first: Rc::new(first),
            second: Rc::new(second),
        }
    }

    /// Creates `<while condition: body>`
    pub fn while_loop(condition: Expression, body: Statement) -> Self {
        Statement::While {
            condition: Rc::new(condition),
            body: Rc::new(body),
        }
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Expression::Number(n),
            Value::Boolean(b) => Expression::Boolean(b),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", Value::Number(*n)),
            Expression::Boolean(b) => write!(f, "{}", Value::Boolean(*b)),
            Expression::Variable(name) => write!(f, "<{}>", name),
            Expression::Add(left, right) => write!(f, "<{} + {}>", left, right),
            Expression::Multiply(left, right) => write!(f, "<{} * {}>", left, right),
            Expression::LessThan(left, right) => write!(f, "<{} < {}>", left, right),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::DoNothing => write!(f, "<do-nothing>"),
            Statement::Assign { name, expression } => write!(f, "<{} = {}>", name, expression),
            Statement::If {
                condition,
                consequence,
                alternative,
            } => write!(f, "<if {}: {} else: {}>", condition, consequence, alternative),
            Statement::Sequence { first, second } => write!(f, "<{}; {}>", first, second),
            Statement::While { condition, body } => write!(f, "<while {}: {}>", condition, body),
        }
    }
}
