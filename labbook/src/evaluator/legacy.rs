use super::operations::apply;
use crate::ast::BinaryOperator;
use crate::error::LineError;
use crate::parser::literals::parse_float_literal;
use crate::{Measurement, SymbolTable};

/// Operator characters in the order they are looked for.
///
/// Only the first class present is split on, at its first occurrence, so
/// `a + b * c` splits on `*` and evaluates as `(a + b) * c`.
const SPLIT_ORDER: [(char, BinaryOperator); 4] = [
    ('*', BinaryOperator::Multiply),
    ('+', BinaryOperator::Add),
    ('/', BinaryOperator::Divide),
    ('-', BinaryOperator::Subtract),
];

/// Evaluate `text` by first-occurrence splitting.
///
/// A chain of the same operator (`a + b + c`) is walked in a loop and folded
/// from the right, so it costs one level of `depth` no matter how long it is.
/// Only a change of operator class nests deeper.
pub fn evaluate(
    text: &str,
    symbols: &SymbolTable,
    depth: usize,
    limit: usize,
) -> Result<Measurement, LineError> {
    if depth > limit {
        return Err(LineError::DepthExceeded { limit });
    }

    let token = text.trim();

    if let Some(measurement) = operand(token, symbols) {
        return Ok(measurement);
    }

    for (symbol, op) in SPLIT_ORDER {
        if !token.contains(symbol) {
            continue;
        }

        let mut operands = Vec::new();
        let mut rest = token;
        while let Some((left, right)) = rest.split_once(symbol) {
            operands.push(evaluate(left, symbols, depth + 1, limit)?);
            rest = right;
            // `a - 1e-3` must not split inside the literal
            if operand(rest.trim(), symbols).is_some() {
                break;
            }
        }
        let last = evaluate(rest, symbols, depth + 1, limit)?;

        return Ok(operands
            .into_iter()
            .rev()
            .fold(last, |right, left| apply(left, op, right)));
    }

    Err(LineError::UnknownToken {
        token: token.to_string(),
    })
}

/// A bound name or a bare number
fn operand(token: &str, symbols: &SymbolTable) -> Option<Measurement> {
    symbols
        .get(token)
        .copied()
        .or_else(|| parse_float_literal(token).map(Measurement::exact))
}
