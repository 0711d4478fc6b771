//! Lenient amount parsing and formatting
//!
//! Every amount and income field in Smart Budget is kept as the text the user
//! typed and interpreted on demand. Interpretation never fails: text that does
//! not read as a finite number counts as zero.

/// Currency glyphs stripped before parsing
const CURRENCY_GLYPHS: [char; 3] = ['€', '$', '£'];

/// Parse user-entered amount text, treating anything unparsable as zero
///
/// Accepts `"1200"`, `"12.50"`, `"12,50"`, `"12,50 €"`, `"$1,234.56"`,
/// `"1.234,56"` and `"1 234,56"`. Separator rules:
/// - when both `,` and `.` appear, the last one is the decimal separator
///   and the other one groups thousands
/// - a single `,` is a decimal separator, several `,` group thousands
///
/// # Examples
/// ```
/// use smart_budget::models::parse_amount_or_zero;
/// assert_eq!(parse_amount_or_zero("12,50 €"), 12.5);
/// assert_eq!(parse_amount_or_zero("abc"), 0.0);
/// assert_eq!(parse_amount_or_zero(""), 0.0);
/// ```
pub fn parse_amount_or_zero(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

/// Parse amount text, returning `None` when it is not a finite number
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_GLYPHS.contains(c))
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let normalized = normalize_separators(&cleaned);
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn normalize_separators(s: &str) -> String {
    let last_comma = s.rfind(',');
    let last_dot = s.rfind('.');

    match (last_comma, last_dot) {
        (Some(comma), Some(dot)) if comma > dot => s.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => s.replace(',', ""),
        (Some(_), None) if s.matches(',').count() == 1 => s.replace(',', "."),
        (Some(_), None) => s.replace(',', ""),
        _ => s.to_string(),
    }
}

/// Render an amount with two decimals and a trailing currency symbol
///
/// Non-finite values render as `"n/a"`.
pub fn format_amount(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    // avoid printing "-0.00"
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    if symbol.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{:.2} {}", value, symbol)
    }
}

/// Render a parsed number back into amount text (`1000.0` becomes `"1000"`)
pub fn amount_to_text(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount_or_zero("1200"), 1200.0);
        assert_eq!(parse_amount_or_zero("12.50"), 12.5);
        assert_eq!(parse_amount_or_zero("  42 "), 42.0);
        assert_eq!(parse_amount_or_zero("-15"), -15.0);
    }

    #[test]
    fn test_blank_and_garbage_are_zero() {
        assert_eq!(parse_amount_or_zero(""), 0.0);
        assert_eq!(parse_amount_or_zero("   "), 0.0);
        assert_eq!(parse_amount_or_zero("abc"), 0.0);
        assert_eq!(parse_amount_or_zero("€"), 0.0);
        assert_eq!(parse_amount_or_zero("1.2.3"), 0.0);
    }

    #[test]
    fn test_non_finite_text_is_zero() {
        assert_eq!(parse_amount_or_zero("inf"), 0.0);
        assert_eq!(parse_amount_or_zero("NaN"), 0.0);
        assert_eq!(parse_amount_or_zero("-infinity"), 0.0);
    }

    #[test]
    fn test_decimal_comma_and_currency() {
        assert_eq!(parse_amount_or_zero("12,50"), 12.5);
        assert_eq!(parse_amount_or_zero("12,50 €"), 12.5);
        assert_eq!(parse_amount_or_zero("€850"), 850.0);
        assert_eq!(parse_amount_or_zero("$19.99"), 19.99);
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_amount_or_zero("1,234.56"), 1234.56);
        assert_eq!(parse_amount_or_zero("1.234,56"), 1234.56);
        assert_eq!(parse_amount_or_zero("1 234,56"), 1234.56);
        assert_eq!(parse_amount_or_zero("1\u{a0}234,5"), 1234.5);
        assert_eq!(parse_amount_or_zero("1,234,567"), 1_234_567.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1200.0, "€"), "1200.00 €");
        assert_eq!(format_amount(-3.456, "$"), "-3.46 $");
        assert_eq!(format_amount(-0.001, "€"), "0.00 €");
        assert_eq!(format_amount(7.5, ""), "7.50");
        assert_eq!(format_amount(f64::INFINITY, "€"), "n/a");
    }

    #[test]
    fn test_amount_to_text() {
        assert_eq!(amount_to_text(1000.0), "1000");
        assert_eq!(amount_to_text(12.5), "12.5");
        assert_eq!(amount_to_text(0.0), "0");
    }
}
