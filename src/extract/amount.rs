use serde_json::Value;

/// Digit strings without a decimal point longer than this are read as cents.
const MAJOR_UNIT_MAX_DIGITS: usize = 2;

/// Normalize a raw amount of unknown representation into USD.
///
/// Returns `None` when the value cannot be read as a finite number. No
/// currency conversion takes place.
pub fn normalize_amount(raw: &Value) -> Option<f64> {
    match raw {
        Value::String(s) => parse_amount(s),
        Value::Number(n) => parse_amount(&n.to_string()),
        _ => None,
    }
}

/// Parse an amount string such as `"$1,050"`, `"12.50"` or `"1050"`.
///
/// A string without a decimal point and longer than two characters is taken
/// as minor units, so `"500"` is `5.0`, not `500.0`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| !is_stripped(*c)).collect();

    let value = if !cleaned.contains('.') && cleaned.chars().count() > MAJOR_UNIT_MAX_DIGITS {
        cleaned.parse::<f64>().ok()? / 100.0
    } else {
        cleaned.parse::<f64>().ok()?
    };

    value.is_finite().then_some(value)
}

fn is_stripped(c: char) -> bool {
    c.is_whitespace() || matches!(c, '$' | ',' | '€' | '£' | '¥')
}
