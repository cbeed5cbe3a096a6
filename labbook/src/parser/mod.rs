//! Line classification
//!
//! A document is read one line at a time. Each trimmed line is either blank
//! or a comment, a definition (`m = 10.0 +/- 0.5`), an expression
//! (`x = m * L`), or unrecognized. Nothing here fails: a document being
//! typed is malformed most of the time, and every shape it can take must
//! classify to something.

pub mod expression;
pub mod literals;

use crate::ast::Span;
use literals::NumericLiteral;
use regex::Regex;

pub use expression::parse_expression;

const IDENTIFIER: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";
const COMMENT_MARKER: char = '#';

/// Parse result for one line
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Empty line or `# comment`
    Blank,
    /// `name = value +/- uncertainty`
    Definition {
        name: String,
        value: NumericLiteral,
        uncertainty: NumericLiteral,
        /// Digits after the decimal point of the uncertainty literal, 0 without one
        decimal_places: usize,
    },
    /// `name = <anything else>`; `text` is the raw right-hand side
    Expression { name: String, text: String },
    Unrecognized,
}

impl Statement {
    /// Name bound by this statement, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Statement::Definition { name, .. } | Statement::Expression { name, .. } => Some(name),
            Statement::Blank | Statement::Unrecognized => None,
        }
    }
}

/// One line of a document, untrimmed, with its location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// Split a document into lines, keeping byte offsets for diagnostics.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A trailing line ending does
/// not produce an extra empty line.
pub fn split_lines(document: &str) -> Vec<SourceLine<'_>> {
    let bytes = document.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        let ending = match bytes[index] {
            b'\r' if bytes.get(index + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => {
                index += 1;
                continue;
            }
        };
        lines.push(source_line(document, start, index, lines.len() + 1));
        index += ending;
        start = index;
    }

    if start < bytes.len() {
        lines.push(source_line(document, start, bytes.len(), lines.len() + 1));
    }

    lines
}

fn source_line(document: &str, start: usize, end: usize, line: usize) -> SourceLine<'_> {
    SourceLine {
        text: &document[start..end],
        span: Span::new(start, end, line),
    }
}

/// Classifies single lines into statements.
///
/// The definition shape is tried before the expression shape, so a line like
/// `m = 1 +/- 0.1` is never handed to the expression evaluator.
pub struct Classifier {
    definition: Regex,
    expression: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        let definition = format!(r"^({IDENTIFIER})\s*=\s*([0-9.]+)\s*\+/-\s*([0-9.]+)$");
        let expression = format!(r"^({IDENTIFIER})\s*=\s*(.+)$");
        Self {
            definition: Regex::new(&definition).expect("definition pattern is valid"),
            expression: Regex::new(&expression).expect("expression pattern is valid"),
        }
    }

    pub fn classify(&self, line: &str) -> Statement {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            return Statement::Blank;
        }

        if let Some(captures) = self.definition.captures(trimmed) {
            let uncertainty = NumericLiteral::parse(&captures[3]);
            let decimal_places = uncertainty.decimal_places();
            return Statement::Definition {
                name: captures[1].to_string(),
                value: NumericLiteral::parse(&captures[2]),
                uncertainty,
                decimal_places,
            };
        }

        if let Some(captures) = self.expression.captures(trimmed) {
            return Statement::Expression {
                name: captures[1].to_string(),
                text: captures[2].to_string(),
            };
        }

        Statement::Unrecognized
    }
}
