use super::operations::apply;
use crate::ast::{BinaryOperator, Expr};
use crate::error::LineError;
use crate::parser::parse_expression;
use crate::{Measurement, SymbolTable};

pub fn evaluate(text: &str, symbols: &SymbolTable, limit: usize) -> Result<Measurement, LineError> {
    let expr = parse_expression(text)?;
    if expr.depth() > limit {
        return Err(LineError::DepthExceeded { limit });
    }
    evaluate_expr(&expr, symbols)
}

fn evaluate_expr(expr: &Expr, symbols: &SymbolTable) -> Result<Measurement, LineError> {
    match expr {
        Expr::Number(n) => Ok(Measurement::exact(*n)),
        Expr::Name(name) => symbols
            .get(name)
            .copied()
            .ok_or_else(|| LineError::UnknownToken {
                token: name.clone(),
            }),
        Expr::Negate(inner) => Ok(-evaluate_expr(inner, symbols)?),
        Expr::Binary(left, BinaryOperator::Power, right) => {
            let base = evaluate_expr(left, symbols)?;
            let exponent = evaluate_expr(right, symbols)?;
            if exponent.uncertainty != 0.0 {
                return Err(LineError::NonScalarExponent {
                    exponent: right.to_string(),
                });
            }
            Ok(apply(base, BinaryOperator::Power, exponent))
        }
        Expr::Binary(left, op, right) => {
            let left = evaluate_expr(left, symbols)?;
            let right = evaluate_expr(right, symbols)?;
            Ok(apply(left, *op, right))
        }
    }
}
