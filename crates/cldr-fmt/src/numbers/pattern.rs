//! Number pattern parser using winnow.
//!
//! A pattern such as `#,##0.00;(#,##0.00)` is reduced to a descriptor of
//! affixes, digit requirements, grouping sizes and the multiplier. The
//! descriptor drives formatting; the pattern text itself is never consulted
//! again.

use std::fmt;

use winnow::combinator::{opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::error::ParseError;

/// A parsed number pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPattern {
    source: String,
    pub positive_prefix: String,
    pub positive_suffix: String,
    pub negative_prefix: String,
    pub negative_suffix: String,
    /// 100 for percent patterns, 1000 for per-mille patterns, otherwise 1.
    pub multiplier: u32,
    /// Required fraction digits; formatting right-pads with zeros up to this
    /// count. `None` when the pattern has no decimal part, in which case the
    /// separator is dropped once no fraction digits remain.
    pub decimal_digits: Option<usize>,
    /// Rounding limit for the fraction, applied half away from zero. 0 when
    /// the pattern has no decimal part, so such patterns round to integers.
    pub max_decimal_digits: usize,
    /// Required integer digits, zero-padded on the left.
    pub integer_digits: usize,
    /// Grouping size nearest the decimal point. 0 disables grouping.
    pub primary_grouping: usize,
    /// Grouping size for all groups past the first. 0 reuses the primary
    /// size.
    pub secondary_grouping: usize,
}

impl NumberPattern {
    /// Parse a CLDR number pattern.
    ///
    /// The pattern splits on `;` into positive and negative subpatterns.
    /// When the negative subpattern is absent it defaults to the positive
    /// one behind a minus sign.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NumberPattern`] with the offending fragment
    /// when the pattern does not have the affix/digits/affix shape, or when
    /// the digit field carries a second decimal point or a grouping
    /// separator inside the fraction.
    ///
    /// # Example
    ///
    /// ```
    /// use cldr_fmt::numbers::NumberPattern;
    ///
    /// let pattern = NumberPattern::parse("#,##0.00 %").unwrap();
    /// assert_eq!(pattern.integer_digits, 1);
    /// assert_eq!(pattern.primary_grouping, 3);
    /// assert_eq!(pattern.decimal_digits, Some(2));
    /// assert_eq!(pattern.max_decimal_digits, 2);
    /// assert_eq!(pattern.multiplier, 100);
    /// assert_eq!(pattern.positive_suffix, " %");
    /// ```
    pub fn parse(source: &str) -> Result<NumberPattern, ParseError> {
        let error = |fragment: &str| ParseError::NumberPattern {
            pattern: source.to_string(),
            fragment: fragment.to_string(),
        };

        let mut remaining = source;
        let (positive, negative) = match subpatterns(&mut remaining) {
            Ok(parsed) if remaining.is_empty() => parsed,
            Ok(_) | Err(_) => return Err(error(remaining)),
        };

        let digit_field = DigitField::analyze(positive.digits).map_err(error)?;
        let multiplier = if positive.has_affix_char('%') {
            100
        } else if positive.has_affix_char('‰') {
            1000
        } else {
            1
        };

        let (negative_prefix, negative_suffix) = match negative {
            Some(subpattern) => (subpattern.prefix.to_string(), subpattern.suffix.to_string()),
            None => (
                format!("-{}", positive.prefix),
                positive.suffix.to_string(),
            ),
        };

        Ok(NumberPattern {
            source: source.to_string(),
            positive_prefix: positive.prefix.to_string(),
            positive_suffix: positive.suffix.to_string(),
            negative_prefix,
            negative_suffix,
            multiplier,
            decimal_digits: digit_field.decimal_digits,
            max_decimal_digits: digit_field.max_decimal_digits,
            integer_digits: digit_field.integer_digits,
            primary_grouping: digit_field.primary_grouping,
            secondary_grouping: digit_field.secondary_grouping,
        })
    }

    /// The pattern text this descriptor was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

struct Subpattern<'a> {
    prefix: &'a str,
    digits: &'a str,
    suffix: &'a str,
}

impl Subpattern<'_> {
    fn has_affix_char(&self, c: char) -> bool {
        self.prefix.contains(c) || self.suffix.contains(c)
    }
}

struct DigitField {
    integer_digits: usize,
    primary_grouping: usize,
    secondary_grouping: usize,
    decimal_digits: Option<usize>,
    max_decimal_digits: usize,
}

impl DigitField {
    fn analyze(digits: &str) -> Result<DigitField, &str> {
        let mut parts = digits.split('.');
        let integer_field = parts.next().unwrap_or("");
        let fraction_field = parts.next();
        if parts.next().is_some() {
            return Err(digits);
        }
        if fraction_field.is_some_and(|field| field.contains(',')) {
            return Err(digits);
        }

        let segments: Vec<&str> = integer_field.split(',').collect();
        let primary_grouping = if segments.len() >= 2 {
            segments[segments.len() - 1].len()
        } else {
            0
        };
        let secondary_grouping = if segments.len() >= 3 {
            segments[segments.len() - 2].len()
        } else {
            0
        };

        Ok(DigitField {
            integer_digits: count_zeros(integer_field),
            primary_grouping,
            secondary_grouping,
            decimal_digits: fraction_field.map(count_zeros),
            max_decimal_digits: fraction_field.map_or(0, str::len),
        })
    }
}

fn count_zeros(field: &str) -> usize {
    field.bytes().filter(|byte| *byte == b'0').count()
}

// ===== Grammar =====

fn subpatterns<'i>(input: &mut &'i str) -> ModalResult<(Subpattern<'i>, Option<Subpattern<'i>>)> {
    (subpattern, opt(preceded(';', subpattern))).parse_next(input)
}

fn subpattern<'i>(input: &mut &'i str) -> ModalResult<Subpattern<'i>> {
    let prefix = affix(input)?;
    let digits = take_while(1.., ['#', '0', ',', '.']).parse_next(input)?;
    let suffix = affix(input)?;
    Ok(Subpattern {
        prefix,
        digits,
        suffix,
    })
}

fn affix<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| {
        !matches!(c, '#' | '0' | ',' | '.' | ';')
    })
    .parse_next(input)
}
