//! Date/time pattern fields and tokenizer.

use std::mem;

/// A field letter recognized in date/time patterns.
///
/// Every letter carries its own run-length rules during rendering; lengths
/// past a field's maximum render as empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `G`, era designator.
    Era,
    /// `y`, calendar year.
    Year,
    /// `Q`, quarter of the year.
    Quarter,
    /// `q`, stand-alone quarter.
    StandaloneQuarter,
    /// `M`, month.
    Month,
    /// `L`, stand-alone month.
    StandaloneMonth,
    /// `w`, ISO week of the year.
    WeekOfYear,
    /// `W`, week of the month.
    WeekOfMonth,
    /// `d`, day of the month.
    DayOfMonth,
    /// `D`, day of the year.
    DayOfYear,
    /// `F`, occurrence of the weekday within the month.
    WeekdayInMonth,
    /// `E`, weekday name.
    Weekday,
    /// `c`, stand-alone weekday.
    StandaloneWeekday,
    /// `e`, local weekday, numeric at lengths below three.
    LocalWeekday,
    /// `a`, am/pm day period.
    DayPeriod,
    /// `h`, hour 1-12.
    Hour12,
    /// `H`, hour 0-23.
    Hour24,
    /// `K`, hour 0-11.
    HourInPeriod,
    /// `k`, hour 1-24.
    HourInDay,
    /// `m`, minute.
    Minute,
    /// `s`, second.
    Second,
    /// `z`, specific non-location zone name.
    ZoneName,
    /// `Z`, basic offset, `+HHMM`.
    ZoneOffset,
    /// `v`, generic non-location zone name.
    ZoneGeneric,
}

impl Field {
    /// The field of a pattern letter, if the letter is recognized.
    pub fn from_letter(letter: char) -> Option<Field> {
        match letter {
            'G' => Some(Field::Era),
            'y' => Some(Field::Year),
            'Q' => Some(Field::Quarter),
            'q' => Some(Field::StandaloneQuarter),
            'M' => Some(Field::Month),
            'L' => Some(Field::StandaloneMonth),
            'w' => Some(Field::WeekOfYear),
            'W' => Some(Field::WeekOfMonth),
            'd' => Some(Field::DayOfMonth),
            'D' => Some(Field::DayOfYear),
            'F' => Some(Field::WeekdayInMonth),
            'E' => Some(Field::Weekday),
            'c' => Some(Field::StandaloneWeekday),
            'e' => Some(Field::LocalWeekday),
            'a' => Some(Field::DayPeriod),
            'h' => Some(Field::Hour12),
            'H' => Some(Field::Hour24),
            'K' => Some(Field::HourInPeriod),
            'k' => Some(Field::HourInDay),
            'm' => Some(Field::Minute),
            's' => Some(Field::Second),
            'z' => Some(Field::ZoneName),
            'Z' => Some(Field::ZoneOffset),
            'v' => Some(Field::ZoneGeneric),
            _ => None,
        }
    }

    /// The pattern letter of this field.
    pub fn letter(self) -> char {
        match self {
            Field::Era => 'G',
            Field::Year => 'y',
            Field::Quarter => 'Q',
            Field::StandaloneQuarter => 'q',
            Field::Month => 'M',
            Field::StandaloneMonth => 'L',
            Field::WeekOfYear => 'w',
            Field::WeekOfMonth => 'W',
            Field::DayOfMonth => 'd',
            Field::DayOfYear => 'D',
            Field::WeekdayInMonth => 'F',
            Field::Weekday => 'E',
            Field::StandaloneWeekday => 'c',
            Field::LocalWeekday => 'e',
            Field::DayPeriod => 'a',
            Field::Hour12 => 'h',
            Field::Hour24 => 'H',
            Field::HourInPeriod => 'K',
            Field::HourInDay => 'k',
            Field::Minute => 'm',
            Field::Second => 's',
            Field::ZoneName => 'z',
            Field::ZoneOffset => 'Z',
            Field::ZoneGeneric => 'v',
        }
    }
}

/// One token of a tokenized date/time pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum DateTimeToken {
    /// Text copied through unchanged.
    Literal(String),
    /// A field with its run length.
    Field { field: Field, length: usize },
}

/// Tokenize a date/time pattern.
///
/// `'` toggles a quoted span, `''` is one literal apostrophe, and a maximal
/// run of one field letter becomes a [`DateTimeToken::Field`]. Anything
/// else, including runs of unrecognized letters, accumulates into literal
/// text.
///
/// # Example
///
/// ```
/// use cldr_fmt::datetime::{DateTimeToken, Field, tokenize};
///
/// let tokens = tokenize("d 'o''clock'");
/// assert_eq!(tokens, vec![
///     DateTimeToken::Field { field: Field::DayOfMonth, length: 1 },
///     DateTimeToken::Literal(" o'clock".to_string()),
/// ]);
/// ```
pub fn tokenize(pattern: &str) -> Vec<DateTimeToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut quoted = false;
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                literal.push('\'');
            } else {
                quoted = !quoted;
            }
            continue;
        }
        if quoted {
            literal.push(c);
            continue;
        }
        match Field::from_letter(c) {
            Some(field) => {
                let mut length = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    length += 1;
                }
                if !literal.is_empty() {
                    tokens.push(DateTimeToken::Literal(mem::take(&mut literal)));
                }
                tokens.push(DateTimeToken::Field { field, length });
            }
            None => literal.push(c),
        }
    }

    if !literal.is_empty() {
        tokens.push(DateTimeToken::Literal(literal));
    }
    tokens
}
