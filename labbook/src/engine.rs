use crate::ast::Span;
use crate::evaluator::{evaluate_expression, EvaluationOptions};
use crate::parser::{split_lines, Classifier, SourceLine, Statement};
use crate::response::{Evaluation, LineOutcome, LineStatus, Warning};
use crate::{LabError, LabResult, LineError, Measurement, SymbolTable};
use std::path::Path;
use tracing::{debug, trace};

/// Conventional extension for notebook files
pub const DOCUMENT_EXTENSION: &str = "lab";

/// Starter notebook written by `labbook new`
pub const EXAMPLE_DOCUMENT: &str = "\
# Pendulum Experiment
# Mass:
m = 10.0 +/- 0.5

# Length:
L = 100.0 +/- 1.0

# Calculate 'x' using the formula
x = m * L
";

/// The LabBook evaluation engine.
///
/// Holds no document state: every call scans the given text from the top
/// and returns a fresh table.
pub struct Engine {
    classifier: Classifier,
    options: EvaluationOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            classifier: Classifier::new(),
            options: EvaluationOptions::default(),
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvaluationOptions) -> Self {
        Self {
            classifier: Classifier::new(),
            options,
        }
    }

    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Evaluate a document, returning every successfully bound name
    pub fn evaluate(&self, document: &str) -> SymbolTable {
        self.evaluate_lines(document).symbols
    }

    /// Evaluate a document and report the outcome of every line.
    ///
    /// Lines are folded top to bottom; each line sees only the names bound
    /// above it. A later binding of a name replaces the earlier one.
    pub fn evaluate_lines(&self, document: &str) -> Evaluation {
        split_lines(document)
            .into_iter()
            .fold(Evaluation::default(), |mut evaluation, line| {
                let status = self.evaluate_line(&line, &mut evaluation);
                evaluation.lines.push(LineOutcome {
                    span: line.span,
                    source: line.text.to_string(),
                    status,
                });
                evaluation
            })
    }

    fn evaluate_line(&self, line: &SourceLine, evaluation: &mut Evaluation) -> LineStatus {
        match self.classifier.classify(line.text) {
            Statement::Blank => {
                trace!(line = line.span.line, "skipped");
                LineStatus::Skipped
            }
            Statement::Definition {
                name,
                value,
                uncertainty,
                decimal_places,
            } => {
                for literal in [&value, &uncertainty] {
                    if literal.is_fallback() {
                        debug!(line = line.span.line, literal = %literal.text, "numeric literal read as 0");
                        evaluation.warnings.push(Warning::NumericFallback {
                            span: line.span,
                            name: name.clone(),
                            literal: literal.text.clone(),
                        });
                    }
                }

                let measurement = if uncertainty.has_decimal_point() {
                    Measurement::with_precision(value.value(), uncertainty.value(), decimal_places)
                } else {
                    Measurement::new(value.value(), uncertainty.value())
                };
                evaluation.symbols.bind(name.clone(), measurement);
                LineStatus::Defined { name, measurement }
            }
            Statement::Expression { name, text } => {
                match evaluate_expression(&text, &evaluation.symbols, &self.options) {
                    Ok(measurement) => {
                        evaluation.symbols.bind(name.clone(), measurement);
                        LineStatus::Derived { name, measurement }
                    }
                    Err(error) => dropped(line.span, Some(name), error),
                }
            }
            Statement::Unrecognized => dropped(line.span, None, LineError::ParseMismatch),
        }
    }

    /// Reject documents larger than the configured limit
    pub fn check_document_size(&self, document: &str) -> LabResult<()> {
        let limit = self.options.limits.max_document_bytes;
        if document.len() > limit {
            return Err(LabError::ResourceLimitExceeded {
                limit_name: "max_document_bytes".to_string(),
                limit_value: format!("{} bytes", limit),
                actual_value: format!("{} bytes", document.len()),
            });
        }
        Ok(())
    }

    /// Read a notebook from disk, enforcing the document size limit
    pub fn read_document(&self, path: &Path) -> LabResult<String> {
        let document = std::fs::read_to_string(path).map_err(|source| LabError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.check_document_size(&document)?;
        Ok(document)
    }
}

fn dropped(span: Span, name: Option<String>, error: LineError) -> LineStatus {
    debug!(line = span.line, %error, "dropped line");
    LineStatus::Dropped { name, error }
}

/// Evaluate a document with default options
pub fn evaluate(document: &str) -> SymbolTable {
    Engine::new().evaluate(document)
}
