//! # LabBook Engine
//!
//! **Measurements in, uncertainties out**
//!
//! LabBook is a line-oriented notebook language for physical measurements.
//! Each line either types in a measurement with its uncertainty or derives a
//! new one from names defined above it; uncertainties propagate automatically
//! and results are rounded to the precision their uncertainty supports.
//!
//! ## Quick Start
//!
//! ```rust
//! let symbols = labbook::evaluate(
//!     "m = 10.0 +/- 0.5\n\
//!      L = 100.0 +/- 1.0\n\
//!      x = m * L",
//! );
//!
//! assert_eq!(symbols.get("m").unwrap().to_string(), "10.0 ± 0.5");
//! assert_eq!(symbols.get("x").unwrap().to_string(), "1000 ± 50");
//! ```
//!
//! ## Document format
//!
//! ```text
//! # comment                      (ignored)
//! name = 9.81 +/- 0.02           (definition)
//! other = name * 2               (expression over names defined above)
//! ```
//!
//! Lines that fit neither shape, or whose expression cannot be resolved, are
//! dropped without stopping the pass. [`Engine::evaluate_lines`] reports why.

pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod measurement;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod symbol_table;

pub use ast::Span;
pub use engine::{evaluate, Engine, DOCUMENT_EXTENSION, EXAMPLE_DOCUMENT};
pub use error::{LabError, LineError};
pub use evaluator::{EvaluationOptions, Grammar};
pub use format::format_measurement;
pub use measurement::Measurement;
pub use parser::{Classifier, Statement};
pub use resource_limits::ResourceLimits;
pub use response::{Evaluation, LineOutcome, LineStatus, Warning};
pub use symbol_table::SymbolTable;

/// Result type for LabBook operations
pub type LabResult<T> = Result<T, LabError>;

#[cfg(test)]
mod tests;
