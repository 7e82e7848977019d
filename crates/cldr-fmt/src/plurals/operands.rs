//! Plural operand extraction.
//!
//! CLDR plural rules are evaluated against six operands derived from the
//! source number, not against the number itself. Trailing fraction zeros are
//! significant ("1.30" is `one` in some locales where "1.3" is not), so the
//! only lossless constructor is the decimal-string form; integers and floats
//! are convenience paths that cannot carry visible trailing zeros.

use std::str::FromStr;

use crate::error::ParseError;

/// Operands derived from a numeric value, as defined by CLDR.
///
/// | operand | meaning                                                  |
/// |---------|----------------------------------------------------------|
/// | `n`     | absolute value of the source number                      |
/// | `i`     | integer digits of `n`                                    |
/// | `v`     | count of visible fraction digits, with trailing zeros    |
/// | `w`     | count of visible fraction digits, without trailing zeros |
/// | `f`     | visible fraction digits as an integer, with zeros        |
/// | `t`     | visible fraction digits as an integer, without zeros     |
/// | `e`     | decimal exponent of the source notation                  |
///
/// # Example
///
/// ```
/// use cldr_fmt::plurals::PluralOperands;
///
/// let operands: PluralOperands = "1.30".parse().unwrap();
/// assert_eq!(operands.i, 1);
/// assert_eq!(operands.v, 2);
/// assert_eq!(operands.w, 1);
/// assert_eq!(operands.f, 30);
/// assert_eq!(operands.t, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PluralOperands {
    /// Absolute value of the source number.
    pub n: f64,
    /// Integer digits of `n`.
    pub i: u64,
    /// Count of visible fraction digits, with trailing zeros.
    pub v: u32,
    /// Count of visible fraction digits, without trailing zeros.
    pub w: u32,
    /// Visible fraction digits as an integer, with trailing zeros.
    pub f: u64,
    /// Visible fraction digits as an integer, without trailing zeros.
    pub t: u64,
    /// Decimal exponent of the source notation, 0 for plain values.
    pub e: i32,
}

impl PluralOperands {
    /// Operands of an integer value.
    pub fn from_integer(value: i64) -> Self {
        let magnitude = value.unsigned_abs();
        Self {
            n: magnitude as f64,
            i: magnitude,
            ..Self::default()
        }
    }

    /// Operands of a float, derived through its shortest decimal form.
    ///
    /// `4.3_f64` means the decimal "4.3" (one visible fraction digit), not
    /// its binary expansion. Non-finite values carry no digit information.
    pub fn from_float(value: f64) -> Self {
        if !value.is_finite() {
            return Self {
                n: value.abs(),
                ..Self::default()
            };
        }
        let text = format!("{value}");
        text.parse().unwrap_or_else(|_| Self::from_integer(0))
    }

    fn from_parts(int_digits: &str, frac_digits: &str, exponent: i32) -> Self {
        let trimmed = frac_digits.trim_end_matches('0');
        let int_for_n = if int_digits.is_empty() { "0" } else { int_digits };
        let n = if frac_digits.is_empty() {
            int_for_n.parse().unwrap_or(0.0)
        } else {
            format!("{int_for_n}.{frac_digits}").parse().unwrap_or(0.0)
        };
        Self {
            n,
            i: saturating_digits(int_digits),
            v: frac_digits.len() as u32,
            w: trimmed.len() as u32,
            f: saturating_digits(frac_digits),
            t: saturating_digits(trimmed),
            e: exponent,
        }
    }
}

impl FromStr for PluralOperands {
    type Err = ParseError;

    /// Parse a decimal literal, optionally in scientific notation.
    ///
    /// Both `e` and CLDR's compact `c` mark the exponent. The mantissa is
    /// expanded by the exponent before operands are derived, so "1.20050c3"
    /// yields the operands of "1200.50" with `e = 3`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let unsigned = trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('+'))
            .unwrap_or(trimmed);
        let error = || ParseError::Decimal {
            text: text.to_string(),
        };

        let (mantissa, exponent) = match unsigned.find(['e', 'E', 'c', 'C']) {
            Some(position) => {
                let exponent: i32 = unsigned[position + 1..].parse().map_err(|_| error())?;
                (&unsigned[..position], exponent)
            }
            None => (unsigned, 0),
        };

        let (int_text, frac_text) = match mantissa.split_once('.') {
            Some((int_text, frac_text)) => (int_text, frac_text),
            None => (mantissa, ""),
        };
        if int_text.is_empty() && frac_text.is_empty() {
            return Err(error());
        }
        if !is_all_digits(int_text) || !is_all_digits(frac_text) {
            return Err(error());
        }

        let (int_digits, frac_digits) = shift_point(int_text, frac_text, exponent);
        Ok(Self::from_parts(&int_digits, &frac_digits, exponent))
    }
}

impl From<i64> for PluralOperands {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for PluralOperands {
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl From<u32> for PluralOperands {
    fn from(value: u32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl From<f64> for PluralOperands {
    fn from(value: f64) -> Self {
        Self::from_float(value)
    }
}

fn is_all_digits(text: &str) -> bool {
    text.bytes().all(|byte| byte.is_ascii_digit())
}

/// Accumulate a digit string into a `u64`, saturating on overflow.
fn saturating_digits(digits: &str) -> u64 {
    digits.bytes().fold(0_u64, |acc, byte| {
        acc.saturating_mul(10).saturating_add(u64::from(byte - b'0'))
    })
}

/// Move the decimal point of `int.frac` by `exponent` places.
fn shift_point(int_text: &str, frac_text: &str, exponent: i32) -> (String, String) {
    if exponent == 0 {
        return (int_text.to_string(), frac_text.to_string());
    }
    if exponent > 0 {
        let shift = exponent.unsigned_abs() as usize;
        let mut int_digits = String::from(int_text);
        if frac_text.len() <= shift {
            int_digits.push_str(frac_text);
            int_digits.push_str(&"0".repeat(shift - frac_text.len()));
            (int_digits, String::new())
        } else {
            int_digits.push_str(&frac_text[..shift]);
            (int_digits, frac_text[shift..].to_string())
        }
    } else {
        let shift = exponent.unsigned_abs() as usize;
        let mut frac_digits = String::new();
        let int_digits = if int_text.len() <= shift {
            frac_digits.push_str(&"0".repeat(shift - int_text.len()));
            frac_digits.push_str(int_text);
            String::new()
        } else {
            let cut = int_text.len() - shift;
            frac_digits.push_str(&int_text[cut..]);
            int_text[..cut].to_string()
        };
        frac_digits.push_str(frac_text);
        (int_digits, frac_digits)
    }
}
