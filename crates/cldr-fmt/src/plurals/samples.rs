//! Parser for the `@integer` / `@decimal` sample section of a plural rule.
//!
//! Sample sections are informative only. They are stored as raw text by the
//! rule set and parsed on demand, never during rule evaluation.

use winnow::combinator::{alt, opt, preceded, separated};
use winnow::prelude::*;
use winnow::token::one_of;

use crate::error::ParseError;
use crate::plurals::rule::{DecimalValue, decimal_value, integer, ws};

/// Parsed sample values for one plural category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples {
    pub integer: SampleList,
    pub decimal: SampleList,
}

/// The values listed after `@integer` or `@decimal`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleList {
    pub ranges: Vec<SampleRange>,
    /// True when the list ends in `…` (or `...`), meaning it is not
    /// exhaustive.
    pub unbounded: bool,
}

/// A single sample value or an inclusive `start~end` span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub start: DecimalValue,
    pub end: Option<DecimalValue>,
}

impl Samples {
    /// Parse a sample section, starting at the first `@`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Samples`] with the offending fragment when the
    /// text does not match the sample grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use cldr_fmt::plurals::Samples;
    ///
    /// let samples = Samples::parse("@integer 2~4, 100, … @decimal 2.0~3.5").unwrap();
    /// assert!(samples.integer.unbounded);
    /// assert_eq!(samples.integer.expand()[..4], ["2", "3", "4", "100"]);
    /// assert_eq!(samples.decimal.expand().len(), 16);
    /// ```
    pub fn parse(source: &str) -> Result<Samples, ParseError> {
        let mut remaining = source.trim();
        match samples(&mut remaining) {
            Ok(samples) if remaining.trim().is_empty() => Ok(samples),
            Ok(_) | Err(_) => Err(ParseError::Samples {
                samples: source.to_string(),
                fragment: remaining.trim().to_string(),
            }),
        }
    }
}

impl SampleList {
    /// Every listed value as decimal text, with `start~end` spans expanded
    /// one step per digit at the span's finest scale.
    pub fn expand(&self) -> Vec<String> {
        self.ranges.iter().flat_map(SampleRange::expand).collect()
    }
}

impl SampleRange {
    fn expand(&self) -> Vec<String> {
        let Some(end) = self.end else {
            return vec![self.start.to_string()];
        };
        let scale = self.start.scale.max(end.scale);
        let Some((first, last)) = self.start.rescale(scale).zip(end.rescale(scale)) else {
            return vec![self.start.to_string(), end.to_string()];
        };
        (first..=last)
            .map(|digits| DecimalValue { digits, scale }.to_string())
            .collect()
    }
}

// ===== Grammar =====

#[derive(Debug, Clone, PartialEq)]
enum SampleItem {
    Range(SampleRange),
    Ellipsis,
}

fn samples(input: &mut &str) -> ModalResult<Samples> {
    let integer = opt(preceded(("@integer", ws), sample_list)).parse_next(input)?;
    let _ = ws(input)?;
    let decimal = opt(preceded(("@decimal", ws), sample_list)).parse_next(input)?;
    Ok(Samples {
        integer: integer.unwrap_or_default(),
        decimal: decimal.unwrap_or_default(),
    })
}

fn sample_list(input: &mut &str) -> ModalResult<SampleList> {
    let items: Vec<SampleItem> = separated(1.., sample_item, (ws, ',', ws)).parse_next(input)?;
    let mut list = SampleList::default();
    for item in items {
        match item {
            SampleItem::Range(range) => list.ranges.push(range),
            SampleItem::Ellipsis => list.unbounded = true,
        }
    }
    Ok(list)
}

fn sample_item(input: &mut &str) -> ModalResult<SampleItem> {
    alt((
        alt(("…", "...")).value(SampleItem::Ellipsis),
        sample_range.map(SampleItem::Range),
    ))
    .parse_next(input)
}

fn sample_range(input: &mut &str) -> ModalResult<SampleRange> {
    (sample_value, opt(preceded((ws, '~', ws), sample_value)))
        .map(|(start, end)| SampleRange { start, end })
        .parse_next(input)
}

/// A sample value, optionally in compact notation (`1.1c6` is 1100000).
fn sample_value(input: &mut &str) -> ModalResult<DecimalValue> {
    (decimal_value, opt(preceded(one_of(['c', 'e']), integer)))
        .verify_map(|(value, exponent)| match exponent {
            None => Some(value),
            Some(exponent) => value.shift(u32::try_from(exponent).ok()?),
        })
        .parse_next(input)
}
