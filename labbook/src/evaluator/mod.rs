//! Expression evaluation against a symbol table
//!
//! Two grammars are available:
//! 1. `Legacy` splits the text on the first operator character found, checking
//!    `*`, `+`, `/` and `-` in that fixed order, and recurses on both halves.
//!    This is how notebooks have always been evaluated; mixed-operator lines
//!    depend on it, so it stays the default.
//! 2. `Standard` parses conventional precedence, parentheses, unary minus and
//!    `^` with a scalar exponent.

pub mod legacy;
pub mod operations;
pub mod standard;

use crate::error::LineError;
use crate::{Measurement, ResourceLimits, SymbolTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    #[default]
    Legacy,
    Standard,
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Legacy => write!(f, "legacy"),
            Grammar::Standard => write!(f, "standard"),
        }
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Grammar::Legacy),
            "standard" => Ok(Grammar::Standard),
            other => Err(format!(
                "unknown grammar '{}', expected 'legacy' or 'standard'",
                other
            )),
        }
    }
}

/// Settings for one evaluation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    pub grammar: Grammar,
    pub limits: ResourceLimits,
}

impl EvaluationOptions {
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// Evaluate the right-hand side of an expression line.
///
/// Only names already present in `symbols` resolve; the table never holds
/// names from lines further down the document.
pub fn evaluate_expression(
    text: &str,
    symbols: &SymbolTable,
    options: &EvaluationOptions,
) -> Result<Measurement, LineError> {
    let limit = options.limits.max_expression_depth;
    match options.grammar {
        Grammar::Legacy => legacy::evaluate(text, symbols, 1, limit),
        Grammar::Standard => standard::evaluate(text, symbols, limit),
    }
}
