use serde::Serialize;

/// A numeric literal from a definition line, kept with its source text.
///
/// Text that does not parse as a float (`.`, `1.2.3`) is not an error: it
/// reads as `0.0`, and `parsed` stays `None` so the fallback can be reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericLiteral {
    pub text: String,
    pub parsed: Option<f64>,
}

impl NumericLiteral {
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            parsed: text.parse::<f64>().ok(),
        }
    }

    pub fn value(&self) -> f64 {
        self.parsed.unwrap_or(0.0)
    }

    pub fn is_fallback(&self) -> bool {
        self.parsed.is_none()
    }

    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Characters after the first `.`, or 0 without one
    pub fn decimal_places(&self) -> usize {
        self.text
            .split_once('.')
            .map(|(_, fraction)| fraction.chars().count())
            .unwrap_or(0)
    }
}

/// Parse a bare floating-point literal from an expression operand.
///
/// Accepts signs, decimal points and exponents (`-2`, `.5`, `6.02e23`), plus
/// the exact spellings `NaN` and `Infinity`. Other words such as `inf` are
/// left to name lookup.
pub fn parse_float_literal(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);
    if matches!(unsigned, "NaN" | "Infinity") {
        return text.parse::<f64>().ok();
    }

    if text
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }
    text.parse::<f64>().ok()
}
