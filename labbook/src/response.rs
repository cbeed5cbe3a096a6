use crate::ast::Span;
use crate::error::LineError;
use crate::{Measurement, SymbolTable};
use serde::Serialize;

/// What a single line contributed to the symbol table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineStatus {
    /// Blank line or comment
    Skipped,
    /// Typed measurement (`name = value +/- uncertainty`)
    Defined {
        name: String,
        measurement: Measurement,
    },
    /// Computed measurement (`name = expression`)
    Derived {
        name: String,
        measurement: Measurement,
    },
    /// The line bound nothing; `name` is set when the line had a binding shape
    Dropped {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        error: LineError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineOutcome {
    pub span: Span,
    pub source: String,
    #[serde(flatten)]
    pub status: LineStatus,
}

impl LineOutcome {
    pub fn is_dropped(&self) -> bool {
        matches!(self.status, LineStatus::Dropped { .. })
    }

    pub fn error(&self) -> Option<&LineError> {
        match &self.status {
            LineStatus::Dropped { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Leniencies applied while binding a line that still succeeded
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A definition literal did not parse and was read as `0.0`
    NumericFallback {
        span: Span,
        name: String,
        literal: String,
    },
}

impl Warning {
    pub fn span(&self) -> Span {
        match self {
            Warning::NumericFallback { span, .. } => *span,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Warning::NumericFallback { name, literal, .. } => {
                format!("'{}' in the definition of '{}' is not a number, read as 0", literal, name)
            }
        }
    }
}

/// Full result of one pass: the symbol table plus what happened on every line
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    pub symbols: SymbolTable,
    pub lines: Vec<LineOutcome>,
    pub warnings: Vec<Warning>,
}

impl Evaluation {
    pub fn dropped(&self) -> impl Iterator<Item = &LineOutcome> {
        self.lines.iter().filter(|line| line.is_dropped())
    }

    /// True when no line was dropped and no literal fell back to 0
    pub fn is_clean(&self) -> bool {
        self.dropped().next().is_none() && self.warnings.is_empty()
    }
}
