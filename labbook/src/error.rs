use serde::Serialize;
use thiserror::Error;

/// Why a single line did not bind a name.
///
/// None of these abort a pass over a document: the line is dropped and the
/// scan continues with the next line.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineError {
    /// The line is neither a comment, a definition nor an expression
    #[error("line does not match `name = value +/- uncertainty` or `name = expression`")]
    ParseMismatch,

    /// The expression (or one of its operands) is not a bound name or a number
    #[error("unknown token '{token}'")]
    UnknownToken { token: String },

    /// The expression nests deeper than the configured limit
    #[error("expression nests deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    /// The standard grammar rejected the expression text
    #[error("syntax error: {message}")]
    Syntax { message: String },

    /// An exponent carried an uncertainty of its own
    #[error("exponent '{exponent}' must be an exact number")]
    NonScalarExponent { exponent: String },
}

/// Errors raised outside the per-line fold: loading documents and limits
#[derive(Debug, Error)]
pub enum LabError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("resource limit exceeded: {limit_name} (limit {limit_value}, actual {actual_value})")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
    },
}
