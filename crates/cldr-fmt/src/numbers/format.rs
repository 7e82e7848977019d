//! Localized number formatting.
//!
//! Formatting works on decimal text, not on floats. The value is first
//! rendered at 14 significant digits, then rounded, grouped and localized
//! as strings, so binary artifacts like `4.3 * 100` showing up as
//! `430.00000000000006` never reach the output.

use crate::cache::PatternCache;
use crate::error::ParseError;
use crate::numbers::pattern::NumberPattern;
use crate::numbers::symbols::NumberSymbols;

const SIGNIFICANT_DIGITS: usize = 14;

/// Format a number with a pattern looked up through the global cache.
///
/// # Errors
///
/// Returns [`ParseError::NumberPattern`] when the pattern text is invalid.
///
/// # Example
///
/// ```
/// use cldr_fmt::numbers::{NumberSymbols, format_number};
///
/// let symbols = NumberSymbols::builder().decimal(",").group(".").build();
/// let formatted = format_number(12345.67, "#,##0.00", &symbols).unwrap();
/// assert_eq!(formatted, "12.345,67");
/// ```
pub fn format_number(
    value: f64,
    pattern: &str,
    symbols: &NumberSymbols,
) -> Result<String, ParseError> {
    let pattern = PatternCache::global().number_pattern(pattern)?;
    Ok(format_with_pattern(value, &pattern, symbols))
}

/// Format a currency amount, replacing `¤` in the pattern's affixes with
/// the currency symbol.
///
/// # Errors
///
/// Returns [`ParseError::NumberPattern`] when the pattern text is invalid.
pub fn format_currency(
    value: f64,
    pattern: &str,
    symbols: &NumberSymbols,
    currency_symbol: &str,
) -> Result<String, ParseError> {
    let pattern = PatternCache::global().number_pattern(pattern)?;
    Ok(format_currency_with_pattern(
        value,
        &pattern,
        symbols,
        currency_symbol,
    ))
}

/// Format a number with an already parsed pattern.
///
/// # Example
///
/// ```
/// use cldr_fmt::numbers::{NumberPattern, NumberSymbols, format_with_pattern};
///
/// let pattern = NumberPattern::parse("#,##0.##").unwrap();
/// let symbols = NumberSymbols::default();
/// assert_eq!(format_with_pattern(4123.457, &pattern, &symbols), "4,123.46");
/// assert_eq!(format_with_pattern(-4.0, &pattern, &symbols), "-4");
/// ```
pub fn format_with_pattern(
    value: f64,
    pattern: &NumberPattern,
    symbols: &NumberSymbols,
) -> String {
    if value.is_nan() {
        return symbols.nan.clone();
    }

    let (prefix, suffix) = if value < 0.0 {
        (&pattern.negative_prefix, &pattern.negative_suffix)
    } else {
        (&pattern.positive_prefix, &pattern.positive_suffix)
    };

    let magnitude = value.abs() * f64::from(pattern.multiplier);
    let body = if magnitude.is_infinite() {
        symbols.infinity.clone()
    } else {
        let (int_text, frac_text) = decimal_parts(magnitude);
        let (int_text, frac_text) = round_at(&int_text, &frac_text, pattern.max_decimal_digits);
        let grouped = group_integer(&int_text, pattern, &symbols.group);
        join_fraction(grouped, &frac_text, pattern, &symbols.decimal)
    };

    let text = format!(
        "{}{body}{}",
        localize_affix(prefix, symbols),
        localize_affix(suffix, symbols)
    );
    transliterate(&text, symbols)
}

/// Format a currency amount with an already parsed pattern.
pub fn format_currency_with_pattern(
    value: f64,
    pattern: &NumberPattern,
    symbols: &NumberSymbols,
    currency_symbol: &str,
) -> String {
    format_with_pattern(value, pattern, symbols).replace('¤', currency_symbol)
}

/// Split a non-negative finite value into integer and fraction digit text,
/// taken at 14 significant digits with trailing fraction zeros removed.
fn decimal_parts(value: f64) -> (String, String) {
    let scientific = format!("{value:.precision$e}", precision = SIGNIFICANT_DIGITS - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return (scientific, String::new());
    };
    let digit_text: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let point = exponent + 1;

    if point <= 0 {
        let fraction = format!("{}{digit_text}", "0".repeat(point.unsigned_abs() as usize));
        return ("0".to_string(), trim_fraction(&fraction));
    }

    let point = point.unsigned_abs() as usize;
    if point >= digit_text.len() {
        let integer = format!("{digit_text}{}", "0".repeat(point - digit_text.len()));
        (integer, String::new())
    } else {
        let (integer, fraction) = digit_text.split_at(point);
        (integer.to_string(), trim_fraction(fraction))
    }
}

/// Round the fraction to at most `max` digits, half away from zero.
fn round_at(int_text: &str, frac_text: &str, max: usize) -> (String, String) {
    if frac_text.len() <= max {
        return (int_text.to_string(), frac_text.to_string());
    }

    let mut digits: Vec<u8> = format!("{int_text}{}", &frac_text[..max]).into_bytes();
    if frac_text.as_bytes()[max] >= b'5' {
        let mut position = digits.len();
        loop {
            if position == 0 {
                digits.insert(0, b'1');
                break;
            }
            position -= 1;
            if digits[position] == b'9' {
                digits[position] = b'0';
            } else {
                digits[position] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - max;
    let text = String::from_utf8(digits).unwrap_or_default();
    let (int_part, frac_part) = text.split_at(int_len);
    (int_part.to_string(), trim_fraction(frac_part))
}

/// Zero-pad the integer text and insert grouping separators right to left,
/// the primary size innermost and the secondary size beyond it.
fn group_integer(digits: &str, pattern: &NumberPattern, group_symbol: &str) -> String {
    let padded = format!("{digits:0>width$}", width = pattern.integer_digits);
    let primary = pattern.primary_grouping;
    if primary < 1 || padded.len() <= primary {
        return padded;
    }
    let secondary = if pattern.secondary_grouping > 0 {
        pattern.secondary_grouping
    } else {
        primary
    };

    let (head, tail) = padded.split_at(padded.len() - primary);
    let mut groups = vec![tail.to_string()];
    let mut rest = head;
    while rest.len() > secondary {
        let (left, right) = rest.split_at(rest.len() - secondary);
        groups.push(right.to_string());
        rest = left;
    }
    groups.push(rest.to_string());
    groups.reverse();
    groups.join(group_symbol)
}

fn join_fraction(
    integer: String,
    fraction: &str,
    pattern: &NumberPattern,
    decimal_symbol: &str,
) -> String {
    let mut fraction = fraction.to_string();
    if let Some(minimum) = pattern.decimal_digits {
        if fraction.len() < minimum {
            fraction = format!("{fraction:0<minimum$}");
        }
    }
    if fraction.is_empty() {
        return integer;
    }
    format!("{integer}{decimal_symbol}{fraction}")
}

fn localize_affix(affix: &str, symbols: &NumberSymbols) -> String {
    let mut output = String::with_capacity(affix.len());
    for c in affix.chars() {
        match c {
            '%' => output.push_str(&symbols.percent_sign),
            '‰' => output.push_str(&symbols.per_mille),
            '-' => output.push_str(&symbols.minus_sign),
            '+' => output.push_str(&symbols.plus_sign),
            _ => output.push(c),
        }
    }
    output
}

/// Swap ASCII digits for the locale's digit glyphs, when it has any.
fn transliterate(text: &str, symbols: &NumberSymbols) -> String {
    let Some(digits) = &symbols.digits else {
        return text.to_string();
    };
    let table: Vec<char> = digits.chars().collect();
    if table.len() != 10 {
        return text.to_string();
    }
    text.chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|digit| table.get(digit as usize).copied())
                .unwrap_or(c)
        })
        .collect()
}

fn trim_fraction(fraction: &str) -> String {
    fraction.trim_end_matches('0').to_string()
}
