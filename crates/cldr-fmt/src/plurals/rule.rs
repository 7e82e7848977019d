//! Plural rule condition parser and evaluator using winnow.
//!
//! Implements the CLDR rule grammar:
//! - `condition = and_condition ('or' and_condition)*`
//! - `and_condition = relation ('and' relation)*`
//! - `relation = operand ('%' value)? ('=' | '!=') range_list`
//!
//! Comparisons are exact. Operand values are kept as scaled decimal integers
//! so that `n % 3 = 1.3` matches 4.3 without floating-point noise.

use std::fmt;

use winnow::combinator::{alt, opt, preceded, separated, separated_pair};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::error::ParseError;
use crate::plurals::operands::PluralOperands;

/// One CLDR plural operand symbol.
///
/// `c` in rule text is an alias for `e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    N,
    I,
    V,
    W,
    F,
    T,
    E,
}

impl Operand {
    /// The letter used for this operand in rule text.
    pub fn symbol(self) -> char {
        match self {
            Operand::N => 'n',
            Operand::I => 'i',
            Operand::V => 'v',
            Operand::W => 'w',
            Operand::F => 'f',
            Operand::T => 't',
            Operand::E => 'e',
        }
    }

    fn value(self, operands: &PluralOperands) -> Scaled {
        match self {
            Operand::N => {
                let base = pow10(operands.v).unwrap_or(i128::MAX);
                Scaled {
                    digits: i128::from(operands.i)
                        .saturating_mul(base)
                        .saturating_add(i128::from(operands.f)),
                    scale: operands.v,
                }
            }
            Operand::I => Scaled::integer(i128::from(operands.i)),
            Operand::V => Scaled::integer(i128::from(operands.v)),
            Operand::W => Scaled::integer(i128::from(operands.w)),
            Operand::F => Scaled::integer(i128::from(operands.f)),
            Operand::T => Scaled::integer(i128::from(operands.t)),
            Operand::E => Scaled::integer(i128::from(operands.e)),
        }
    }
}

/// A decimal literal from rule text, kept as scaled digits so comparisons
/// never go through floating point: `value = digits / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalValue {
    pub digits: u64,
    pub scale: u32,
}

impl DecimalValue {
    /// Rescale the digits to a larger scale, if representable.
    pub(super) fn rescale(self, scale: u32) -> Option<u64> {
        let shift = scale.checked_sub(self.scale)?;
        self.digits.checked_mul(10_u64.checked_pow(shift)?)
    }

    /// Multiply by `10^exponent`, for compact-notation sample values.
    pub(super) fn shift(self, exponent: u32) -> Option<DecimalValue> {
        if exponent < self.scale {
            return Some(DecimalValue {
                digits: self.digits,
                scale: self.scale - exponent,
            });
        }
        let digits = self
            .digits
            .checked_mul(10_u64.checked_pow(exponent - self.scale)?)?;
        Some(DecimalValue { digits, scale: 0 })
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.digits);
        }
        let width = self.scale as usize + 1;
        let text = format!("{:0>width$}", self.digits);
        let (int_text, frac_text) = text.split_at(text.len() - self.scale as usize);
        write!(f, "{int_text}.{frac_text}")
    }
}

/// A literal or inclusive range inside a relation's range list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeItem {
    /// A single literal, possibly decimal.
    Value(DecimalValue),
    /// An inclusive integer range. Only integer values fall inside it,
    /// so 3.5 is not in `2..4`.
    Range { lo: u64, hi: u64 },
}

impl RangeItem {
    fn contains(self, value: Scaled) -> bool {
        match self {
            RangeItem::Value(literal) => value.equals(literal),
            RangeItem::Range { lo, hi } => value
                .to_integer()
                .is_some_and(|n| n >= i128::from(lo) && n <= i128::from(hi)),
        }
    }
}

/// A single comparison between a (possibly modulo-reduced) operand and a set
/// of values or ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub operand: Operand,
    pub modulus: Option<u64>,
    pub negated: bool,
    pub ranges: Vec<RangeItem>,
}

impl Relation {
    /// Evaluate this relation against a set of operands.
    pub fn matches(&self, operands: &PluralOperands) -> bool {
        let mut value = self.operand.value(operands);
        if let Some(modulus) = self.modulus {
            value = value.modulo(modulus);
        }
        let in_set = self.ranges.iter().any(|item| item.contains(value));
        in_set != self.negated
    }
}

/// A parsed plural rule condition.
///
/// The rule matches when every relation of any one alternative matches. A
/// rule with no alternatives (the empty condition) matches every input; it
/// is the implicit rule of the `other` category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub alternatives: Vec<Vec<Relation>>,
}

impl Rule {
    /// Parse rule text into a condition.
    ///
    /// Trailing `@integer`/`@decimal` sample lists are ignored here; they
    /// are kept as raw text by the rule set and parsed on demand.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Rule`] with the offending fragment when the
    /// condition text does not match the grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use cldr_fmt::plurals::{PluralOperands, Rule};
    ///
    /// let rule = Rule::parse("i = 1 and v = 0 @integer 1").unwrap();
    /// assert!(rule.matches(&PluralOperands::from_integer(1)));
    /// assert!(!rule.matches(&"1.0".parse().unwrap()));
    /// ```
    pub fn parse(source: &str) -> Result<Rule, ParseError> {
        let condition = source
            .split_once('@')
            .map_or(source, |(condition, _)| condition)
            .trim();
        if condition.is_empty() {
            return Ok(Rule::default());
        }

        let mut remaining = condition;
        match rule_condition(&mut remaining) {
            Ok(rule) if remaining.trim().is_empty() => Ok(rule),
            Ok(_) | Err(_) => Err(ParseError::Rule {
                rule: source.to_string(),
                fragment: remaining.trim().to_string(),
            }),
        }
    }

    /// Evaluate the condition against a set of operands.
    pub fn matches(&self, operands: &PluralOperands) -> bool {
        self.alternatives.is_empty()
            || self
                .alternatives
                .iter()
                .any(|relations| relations.iter().all(|relation| relation.matches(operands)))
    }
}

// ===== Exact scaled-decimal arithmetic =====

/// An operand value as an exact scaled decimal: `value = digits / 10^scale`.
#[derive(Debug, Clone, Copy)]
struct Scaled {
    digits: i128,
    scale: u32,
}

impl Scaled {
    fn integer(digits: i128) -> Scaled {
        Scaled { digits, scale: 0 }
    }

    fn modulo(self, divisor: u64) -> Scaled {
        let scaled_divisor =
            pow10(self.scale).and_then(|base| i128::from(divisor).checked_mul(base));
        match scaled_divisor {
            Some(scaled_divisor) if scaled_divisor != 0 => Scaled {
                digits: self.digits % scaled_divisor,
                scale: self.scale,
            },
            _ => self,
        }
    }

    fn equals(self, literal: DecimalValue) -> bool {
        let left = pow10(literal.scale).and_then(|base| self.digits.checked_mul(base));
        let right = pow10(self.scale).and_then(|base| i128::from(literal.digits).checked_mul(base));
        matches!((left, right), (Some(left), Some(right)) if left == right)
    }

    fn to_integer(self) -> Option<i128> {
        let base = pow10(self.scale)?;
        (self.digits % base == 0).then(|| self.digits.div_euclid(base))
    }
}

fn pow10(exponent: u32) -> Option<i128> {
    10_i128.checked_pow(exponent)
}

// ===== Grammar =====

fn rule_condition(input: &mut &str) -> ModalResult<Rule> {
    let alternatives: Vec<Vec<Relation>> =
        separated(1.., and_chain, (ws, "or", ws)).parse_next(input)?;
    Ok(Rule { alternatives })
}

fn and_chain(input: &mut &str) -> ModalResult<Vec<Relation>> {
    separated(1.., relation, (ws, "and", ws)).parse_next(input)
}

fn relation(input: &mut &str) -> ModalResult<Relation> {
    let operand = operand(input)?;
    let modulus = opt(preceded((ws, modulo_sign, ws), integer)).parse_next(input)?;
    let _ = ws(input)?;
    let negated = alt(("!=".value(true), '='.value(false))).parse_next(input)?;
    let _ = ws(input)?;
    let ranges: Vec<RangeItem> = separated(1.., range_item, (ws, ',', ws)).parse_next(input)?;
    Ok(Relation {
        operand,
        modulus,
        negated,
        ranges,
    })
}

fn operand(input: &mut &str) -> ModalResult<Operand> {
    alt((
        'n'.value(Operand::N),
        'i'.value(Operand::I),
        'v'.value(Operand::V),
        'w'.value(Operand::W),
        'f'.value(Operand::F),
        't'.value(Operand::T),
        'e'.value(Operand::E),
        'c'.value(Operand::E),
    ))
    .parse_next(input)
}

fn modulo_sign(input: &mut &str) -> ModalResult<()> {
    alt(('%'.void(), "mod".void())).parse_next(input)
}

fn range_item(input: &mut &str) -> ModalResult<RangeItem> {
    alt((
        separated_pair(integer, "..", integer).map(|(lo, hi)| RangeItem::Range { lo, hi }),
        decimal_value.map(RangeItem::Value),
    ))
    .parse_next(input)
}

/// Parse a decimal literal, shared with the sample-list grammar.
pub(super) fn decimal_value(input: &mut &str) -> ModalResult<DecimalValue> {
    (digits, opt(preceded('.', digits)))
        .try_map(|(int_text, frac_text): (&str, Option<&str>)| {
            let frac_text = frac_text.unwrap_or("");
            let combined = format!("{int_text}{frac_text}");
            combined.parse().map(|digits| DecimalValue {
                digits,
                scale: frac_text.len() as u32,
            })
        })
        .parse_next(input)
}

pub(super) fn integer(input: &mut &str) -> ModalResult<u64> {
    digits.try_map(str::parse::<u64>).parse_next(input)
}

fn digits<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)
}

/// Parse optional whitespace.
pub(super) fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
