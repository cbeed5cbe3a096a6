use crate::ast::{BinaryOperator, Expr};
use crate::error::LineError;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "src/parser/expression.pest"]
pub struct ExpressionParser;

/// Parse expression text with the standard (precedence and parentheses) grammar
pub fn parse_expression(text: &str) -> Result<Expr, LineError> {
    let mut pairs = ExpressionParser::parse(Rule::expression, text.trim()).map_err(|e| {
        LineError::Syntax {
            message: e.variant.message().into_owned(),
        }
    })?;

    let expression = pairs.next().ok_or_else(|| syntax("empty expression"))?;
    let sum = expression
        .into_inner()
        .find(|p| p.as_rule() == Rule::sum)
        .ok_or_else(|| syntax("missing expression body"))?;

    parse_sum(sum)
}

fn syntax(message: &str) -> LineError {
    LineError::Syntax {
        message: message.to_string(),
    }
}

fn parse_sum(pair: Pair<Rule>) -> Result<Expr, LineError> {
    let mut pairs = pair.into_inner();
    let mut left = parse_product(
        pairs
            .next()
            .ok_or_else(|| syntax("missing left operand of sum"))?,
    )?;

    while let Some(op_pair) = pairs.next() {
        let op = match op_pair.as_rule() {
            Rule::plus => BinaryOperator::Add,
            Rule::minus => BinaryOperator::Subtract,
            other => return Err(syntax(&format!("unexpected operator {:?} in sum", other))),
        };
        let right = parse_product(
            pairs
                .next()
                .ok_or_else(|| syntax("missing right operand of sum"))?,
        )?;
        left = Expr::binary(left, op, right);
    }

    Ok(left)
}

fn parse_product(pair: Pair<Rule>) -> Result<Expr, LineError> {
    let mut pairs = pair.into_inner();
    let mut left = parse_unary(
        pairs
            .next()
            .ok_or_else(|| syntax("missing left operand of product"))?,
    )?;

    while let Some(op_pair) = pairs.next() {
        let op = match op_pair.as_rule() {
            Rule::star => BinaryOperator::Multiply,
            Rule::slash => BinaryOperator::Divide,
            other => {
                return Err(syntax(&format!(
                    "unexpected operator {:?} in product",
                    other
                )))
            }
        };
        let right = parse_unary(
            pairs
                .next()
                .ok_or_else(|| syntax("missing right operand of product"))?,
        )?;
        left = Expr::binary(left, op, right);
    }

    Ok(left)
}

fn parse_unary(pair: Pair<Rule>) -> Result<Expr, LineError> {
    let mut negations = 0usize;
    let mut operand = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::negate => negations += 1,
            Rule::affirm => {}
            Rule::power => operand = Some(parse_power(inner)?),
            other => return Err(syntax(&format!("unexpected {:?} in unary", other))),
        }
    }

    let mut expr = operand.ok_or_else(|| syntax("missing operand after sign"))?;
    for _ in 0..negations {
        expr = Expr::Negate(Box::new(expr));
    }
    Ok(expr)
}

fn parse_power(pair: Pair<Rule>) -> Result<Expr, LineError> {
    let mut pairs = pair.into_inner();
    let base = parse_primary(pairs.next().ok_or_else(|| syntax("missing base"))?)?;

    match pairs.next() {
        Some(op_pair) if op_pair.as_rule() == Rule::caret => {
            let exponent = parse_unary(
                pairs
                    .next()
                    .ok_or_else(|| syntax("missing exponent after '^'"))?,
            )?;
            Ok(Expr::binary(base, BinaryOperator::Power, exponent))
        }
        Some(other) => Err(syntax(&format!(
            "unexpected {:?} after base",
            other.as_rule()
        ))),
        None => Ok(base),
    }
}

fn parse_primary(pair: Pair<Rule>) -> Result<Expr, LineError> {
    match pair.as_rule() {
        Rule::number => pair
            .as_str()
            .parse::<f64>()
            .map(Expr::Number)
            .map_err(|e| syntax(&format!("invalid number '{}': {}", pair.as_str(), e))),
        Rule::name => Ok(Expr::Name(pair.as_str().to_string())),
        Rule::sum => parse_sum(pair),
        other => Err(syntax(&format!("unexpected {:?} in operand", other))),
    }
}
