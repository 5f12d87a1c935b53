use core::fmt;

use serde::{Deserialize, Serialize};

/// Symbol prefixed to balances when no other one is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A signed account balance.
///
/// Balances are plain floating point numbers: they may be negative,
/// fractional, or even NaN when the user typed something that is not a
/// number. Nothing downstream rejects NaN; it renders as `$NaN`.
///
/// # Examples
///
/// ```rust
/// use engine::Balance;
///
/// assert_eq!(Balance::parse_lenient("100.5").format_with("$"), "$100.50");
/// assert_eq!(Balance::parse_lenient("12abc").value(), 12.0);
/// assert!(Balance::parse_lenient("abc").value().is_nan());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(f64);

impl Balance {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Parses user text the forgiving way a browser number field does.
    ///
    /// Leading whitespace is skipped and the longest numeric prefix is used
    /// (`"12abc"` is 12, `"1e3"` is 1000). `Infinity` with an optional sign is
    /// recognized. Text with no numeric prefix yields NaN instead of an error.
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        Self(numeric_prefix(text).unwrap_or(f64::NAN))
    }

    /// Formats the balance for display: `symbol` followed by exactly two
    /// fractional digits.
    #[must_use]
    pub fn format_with(self, symbol: &str) -> String {
        format!("{symbol}{}", self.fixed_two())
    }

    /// Shortest text that parses back to the same balance, used to seed the
    /// edit form.
    #[must_use]
    pub fn to_draft_text(self) -> String {
        match special_text(self.0) {
            Some(text) => text.to_string(),
            None => self.0.to_string(),
        }
    }

    fn fixed_two(self) -> String {
        match special_text(self.0) {
            Some(text) => text.to_string(),
            None => format!("{:.2}", self.0),
        }
    }
}

impl From<f64> for Balance {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

fn special_text(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}

fn numeric_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if text.get(end..).is_some_and(|rest| rest.starts_with("Infinity")) {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text.get(..end)?.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> f64 {
        Balance::parse_lenient(text).value()
    }

    #[test]
    fn parse_plain_numbers() {
        assert_eq!(parse("100.5"), 100.5);
        assert_eq!(parse("50"), 50.0);
        assert_eq!(parse("-3.25"), -3.25);
        assert_eq!(parse("+7"), 7.0);
        assert_eq!(parse(".5"), 0.5);
        assert_eq!(parse("5."), 5.0);
        assert_eq!(parse("  42  "), 42.0);
    }

    #[test]
    fn parse_takes_longest_numeric_prefix() {
        assert_eq!(parse("12abc"), 12.0);
        assert_eq!(parse("1.5.3"), 1.5);
        assert_eq!(parse("1e3"), 1000.0);
        assert_eq!(parse("2E-2x"), 0.02);
        assert_eq!(parse("7e"), 7.0);
        assert_eq!(parse("7e+"), 7.0);
    }

    #[test]
    fn parse_infinity() {
        assert_eq!(parse("Infinity"), f64::INFINITY);
        assert_eq!(parse("-Infinity and beyond"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_non_numeric_yields_nan() {
        assert!(parse("").is_nan());
        assert!(parse("abc").is_nan());
        assert!(parse(".").is_nan());
        assert!(parse("-").is_nan());
        assert!(parse("$10").is_nan());
        assert!(parse("NaN").is_nan());
    }

    #[test]
    fn format_with_two_decimals() {
        assert_eq!(Balance::new(100.5).format_with("$"), "$100.50");
        assert_eq!(Balance::new(50.0).format_with("$"), "$50.00");
        assert_eq!(Balance::new(-3.254).format_with("$"), "$-3.25");
        assert_eq!(Balance::new(0.0).format_with("€"), "€0.00");
        assert_eq!(Balance::new(f64::NAN).format_with("$"), "$NaN");
        assert_eq!(Balance::new(f64::INFINITY).format_with("$"), "$Infinity");
        assert_eq!(Balance::new(200.0).to_string(), "$200.00");
    }

    #[test]
    fn draft_text_round_trips() {
        assert_eq!(Balance::new(100.5).to_draft_text(), "100.5");
        assert_eq!(Balance::new(200.0).to_draft_text(), "200");
        assert_eq!(Balance::new(-0.25).to_draft_text(), "-0.25");
        assert_eq!(Balance::new(f64::NEG_INFINITY).to_draft_text(), "-Infinity");
        assert!(
            Balance::parse_lenient(&Balance::new(f64::NAN).to_draft_text())
                .value()
                .is_nan()
        );
    }
}
