//! Syntax tree types
//!
//! - `Span` locates a line within a document for diagnostics
//! - `Expr` is the tree built by the standard expression grammar

use serde::Serialize;
use std::fmt;

/// Byte range of a line within a document, plus its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Power => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Name(String),
    Negate(Box<Expr>),
    Binary(Box<Expr>, BinaryOperator, Box<Expr>),
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::Binary(Box::new(left), op, Box::new(right))
    }

    /// Nesting depth of the tree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number(_) | Expr::Name(_) => 1,
            Expr::Negate(inner) => inner.depth() + 1,
            Expr::Binary(left, _, right) => left.depth().max(right.depth()) + 1,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Negate(inner) => write!(f, "-{}", inner),
            Expr::Binary(left, op, right) => write!(f, "({} {} {})", left, op, right),
        }
    }
}
