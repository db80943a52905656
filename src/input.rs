//! Parsing of user-typed curve coefficients.

use crate::curve::WeierstrassCurve;
use crate::error::{ModelError, Result};

/// Parse one coefficient. Surrounding whitespace is ignored; NaN and
/// infinities are rejected along with non-numeric text.
pub fn parse_coefficient(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ModelError::invalid_input(field, trimmed)),
    }
}

/// Parse the `a` and `b` text boxes into a curve.
pub fn parse_parameters(a_text: &str, b_text: &str) -> Result<WeierstrassCurve> {
    let a = parse_coefficient("a", a_text)?;
    let b = parse_coefficient("b", b_text)?;
    Ok(WeierstrassCurve::new(a, b))
}

/// Parse a single line holding both coefficients, e.g. `"-1 0"` or `"-1, 0"`.
pub fn parse_line(line: &str) -> Result<WeierstrassCurve> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let a_text = parts.next().unwrap_or("");
    let b_text = parts.next().unwrap_or("");
    if let Some(extra) = parts.next() {
        return Err(ModelError::invalid_input("b", format!("{} {}", b_text, extra)));
    }
    parse_parameters(a_text, b_text)
}
