//! Abstract syntax of the language
//!
//! Pure data: expressions, statements, structural equality and the
//! angle-bracket rendering used by every trace. Evaluation lives in
//! [`crate::runtime`] and [`crate::compiler`].

mod ast;

pub use ast::{Expression, Statement};
