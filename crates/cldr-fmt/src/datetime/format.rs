//! Date/time rendering against calendar symbols.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Weekday};

use crate::cache::PatternCache;
use crate::datetime::pattern::{DateTimeToken, Field};
use crate::datetime::symbols::{
    CalendarSymbols, FormatWidth, NameContexts, NameWidth, NameWidths, WidthPatterns,
};
use crate::error::FormatError;

/// Formats datetimes against one calendar's symbol tables.
///
/// # Example
///
/// ```
/// use chrono::DateTime;
/// use cldr_fmt::datetime::{CalendarSymbols, DateTimeFormatter};
///
/// let symbols: CalendarSymbols = serde_json::from_value(serde_json::json!({
///     "months": { "format": { "abbreviated": { "3": "Mar" } } }
/// })).unwrap();
/// let datetime = DateTime::parse_from_rfc3339("2024-03-07T16:05:09+01:00").unwrap();
/// let formatter = DateTimeFormatter::new(&symbols);
/// assert_eq!(formatter.format(&datetime, "d MMM y").unwrap(), "7 Mar 2024");
/// assert_eq!(formatter.format(&datetime, "HH:mm").unwrap(), "16:05");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateTimeFormatter<'a> {
    symbols: &'a CalendarSymbols,
    cache: &'a PatternCache,
}

impl<'a> DateTimeFormatter<'a> {
    /// A formatter tokenizing through the process-wide pattern cache.
    pub fn new(symbols: &'a CalendarSymbols) -> Self {
        Self {
            symbols,
            cache: PatternCache::global(),
        }
    }

    /// A formatter tokenizing through a caller-owned cache.
    pub fn with_cache(symbols: &'a CalendarSymbols, cache: &'a PatternCache) -> Self {
        Self { symbols, cache }
    }

    /// Format a datetime. `input` may be a pattern, one of the width
    /// keywords (`full`, `long`, `medium`, `short`) or a skeleton key
    /// prefixed with `:`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingSymbols`] when a rendered field or a
    /// resolved width needs a symbol the calendar does not declare.
    pub fn format(
        &self,
        datetime: &DateTime<FixedOffset>,
        input: &str,
    ) -> Result<String, FormatError> {
        let pattern = self.resolve_pattern(input)?;
        self.render(datetime, &pattern)
    }

    /// Format the date part alone; `input` is a width keyword resolved
    /// against `dateFormats`, or a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingSymbols`] as [`format`](Self::format)
    /// does.
    pub fn format_date(
        &self,
        datetime: &DateTime<FixedOffset>,
        input: &str,
    ) -> Result<String, FormatError> {
        let pattern = self.resolve_width(input, &self.symbols.date_formats, "dateFormats")?;
        self.render(datetime, &pattern)
    }

    /// Format the time part alone; `input` is a width keyword resolved
    /// against `timeFormats`, or a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingSymbols`] as [`format`](Self::format)
    /// does.
    pub fn format_time(
        &self,
        datetime: &DateTime<FixedOffset>,
        input: &str,
    ) -> Result<String, FormatError> {
        let pattern = self.resolve_width(input, &self.symbols.time_formats, "timeFormats")?;
        self.render(datetime, &pattern)
    }

    /// Resolve a width keyword or `:skeleton` input into pattern text.
    ///
    /// A skeleton key missing from `availableFormats` falls back to the
    /// skeleton text itself. A width keyword composes the width's date and
    /// time patterns through its date-time template. Anything else passes
    /// through as a literal pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::MissingSymbols`] when width resolution needs
    /// a pattern the calendar does not declare.
    pub fn resolve_pattern(&self, input: &str) -> Result<String, FormatError> {
        if let Some(skeleton) = input.strip_prefix(':') {
            let formats = &self.symbols.date_time_formats.available_formats;
            return Ok(formats
                .get(skeleton)
                .cloned()
                .unwrap_or_else(|| skeleton.to_string()));
        }
        let Some(width) = FormatWidth::from_keyword(input) else {
            return Ok(input.to_string());
        };
        let template = self.width_pattern(
            &self.symbols.date_time_formats.widths,
            "dateTimeFormats",
            width,
        )?;
        let date = self.width_pattern(&self.symbols.date_formats, "dateFormats", width)?;
        let time = self.width_pattern(&self.symbols.time_formats, "timeFormats", width)?;
        Ok(substitute(&template, &time, &date))
    }

    fn resolve_width(
        &self,
        input: &str,
        patterns: &WidthPatterns,
        table: &str,
    ) -> Result<String, FormatError> {
        match FormatWidth::from_keyword(input) {
            Some(width) => self.width_pattern(patterns, table, width),
            None => Ok(input.to_string()),
        }
    }

    fn width_pattern(
        &self,
        patterns: &WidthPatterns,
        table: &str,
        width: FormatWidth,
    ) -> Result<String, FormatError> {
        patterns
            .of(width)
            .map(ToOwned::to_owned)
            .ok_or_else(|| FormatError::MissingSymbols {
                table: table.to_string(),
                key: width.keyword().to_string(),
            })
    }

    fn render(
        &self,
        datetime: &DateTime<FixedOffset>,
        pattern: &str,
    ) -> Result<String, FormatError> {
        let tokens = self.cache.date_pattern(pattern);
        let mut output = String::new();
        for token in tokens.iter() {
            match token {
                DateTimeToken::Literal(text) => output.push_str(text),
                DateTimeToken::Field { field, length } => {
                    output.push_str(&self.render_field(datetime, *field, *length)?);
                }
            }
        }
        Ok(output)
    }

    fn render_field(
        &self,
        datetime: &DateTime<FixedOffset>,
        field: Field,
        length: usize,
    ) -> Result<String, FormatError> {
        match field {
            Field::Era => self.render_era(datetime.year(), length),
            Field::Year => Ok(render_year(datetime.year(), length)),
            Field::Quarter => self.render_quarter(datetime.month(), length, false),
            Field::StandaloneQuarter => self.render_quarter(datetime.month(), length, true),
            Field::Month => self.render_month(datetime.month(), length, false),
            Field::StandaloneMonth => self.render_month(datetime.month(), length, true),
            Field::WeekOfYear => Ok(numeric_field(datetime.iso_week().week(), length)),
            Field::WeekOfMonth | Field::WeekdayInMonth => Ok(if length == 1 {
                datetime.day().div_ceil(7).to_string()
            } else {
                String::new()
            }),
            Field::DayOfMonth => Ok(numeric_field(datetime.day(), length)),
            Field::DayOfYear => Ok(if length <= 3 {
                pad(i64::from(datetime.ordinal()), length)
            } else {
                String::new()
            }),
            Field::Weekday => self.render_weekday(datetime.weekday(), length, false),
            Field::StandaloneWeekday => self.render_standalone_weekday(datetime.weekday(), length),
            Field::LocalWeekday => {
                if length < 3 {
                    Ok(datetime.weekday().number_from_monday().to_string())
                } else {
                    self.render_weekday(datetime.weekday(), length, false)
                }
            }
            Field::DayPeriod => self.render_day_period(datetime.hour()),
            Field::Hour12 => Ok(numeric_field(hour12(datetime.hour()), length)),
            Field::Hour24 => Ok(numeric_field(datetime.hour(), length)),
            Field::HourInPeriod => Ok(numeric_field(datetime.hour() % 12, length)),
            Field::HourInDay => Ok(numeric_field(hour_in_day(datetime.hour()), length)),
            Field::Minute => Ok(numeric_field(datetime.minute(), length)),
            Field::Second => Ok(numeric_field(datetime.second(), length)),
            Field::ZoneOffset => Ok(zone_offset(datetime.offset().local_minus_utc(), "")),
            Field::ZoneName | Field::ZoneGeneric => {
                Ok(zone_name(datetime.offset().local_minus_utc()))
            }
        }
    }

    fn render_era(&self, year: i32, length: usize) -> Result<String, FormatError> {
        let key = if year > 0 { "1" } else { "0" };
        let eras = &self.symbols.eras;
        match length {
            1..=3 => self.name("eras/eraAbbr", &eras.abbreviated, key),
            4 => self.name("eras/eraNames", &eras.names, key),
            5 => self.name("eras/eraNarrow", &eras.narrow, key),
            _ => Ok(String::new()),
        }
    }

    fn render_quarter(
        &self,
        month: u32,
        length: usize,
        standalone: bool,
    ) -> Result<String, FormatError> {
        let quarter = month.div_ceil(3);
        let (names, context) = self.context(&self.symbols.quarters, standalone);
        let width = match length {
            1 | 2 => return Ok(numeric_field(quarter, length)),
            3 => NameWidth::Abbreviated,
            4 => NameWidth::Wide,
            _ => return Ok(String::new()),
        };
        self.name(
            &format!("quarters/{context}/{}", width.keyword()),
            names.of(width),
            &quarter.to_string(),
        )
    }

    fn render_month(
        &self,
        month: u32,
        length: usize,
        standalone: bool,
    ) -> Result<String, FormatError> {
        let (names, context) = self.context(&self.symbols.months, standalone);
        let width = match length {
            1 | 2 => return Ok(numeric_field(month, length)),
            3 => NameWidth::Abbreviated,
            4 => NameWidth::Wide,
            5 => NameWidth::Narrow,
            _ => return Ok(String::new()),
        };
        self.name(
            &format!("months/{context}/{}", width.keyword()),
            names.of(width),
            &month.to_string(),
        )
    }

    fn render_weekday(
        &self,
        weekday: Weekday,
        length: usize,
        standalone: bool,
    ) -> Result<String, FormatError> {
        let (names, context) = self.context(&self.symbols.days, standalone);
        let width = match length {
            1..=3 => NameWidth::Abbreviated,
            4 => NameWidth::Wide,
            5 => NameWidth::Narrow,
            6 => NameWidth::Short,
            _ => return Ok(String::new()),
        };
        self.name(
            &format!("days/{context}/{}", width.keyword()),
            names.of(width),
            weekday_code(weekday),
        )
    }

    /// Stand-alone weekday: numeric at one letter, names at three to six.
    /// Two letters have no stand-alone form and render empty.
    fn render_standalone_weekday(
        &self,
        weekday: Weekday,
        length: usize,
    ) -> Result<String, FormatError> {
        match length {
            1 => Ok(weekday.number_from_monday().to_string()),
            3..=6 => self.render_weekday(weekday, length, true),
            _ => Ok(String::new()),
        }
    }

    fn render_day_period(&self, hour: u32) -> Result<String, FormatError> {
        let key = if hour < 12 { "am" } else { "pm" };
        self.name(
            "dayPeriods/format/abbreviated",
            self.symbols.day_periods.format.of(NameWidth::Abbreviated),
            key,
        )
    }

    fn context<'s>(
        &self,
        contexts: &'s NameContexts,
        standalone: bool,
    ) -> (&'s NameWidths, &'static str) {
        if standalone {
            (&contexts.standalone, "stand-alone")
        } else {
            (&contexts.format, "format")
        }
    }

    fn name(
        &self,
        table: &str,
        names: &HashMap<String, String>,
        key: &str,
    ) -> Result<String, FormatError> {
        names
            .get(key)
            .cloned()
            .ok_or_else(|| FormatError::MissingSymbols {
                table: table.to_string(),
                key: key.to_string(),
            })
    }
}

/// Format a datetime through the process-wide pattern cache.
///
/// # Errors
///
/// Returns [`FormatError::MissingSymbols`] when a rendered field or a
/// resolved width needs a symbol the calendar does not declare.
pub fn format_datetime(
    datetime: &DateTime<FixedOffset>,
    input: &str,
    symbols: &CalendarSymbols,
) -> Result<String, FormatError> {
    DateTimeFormatter::new(symbols).format(datetime, input)
}

/// Replace `{0}` and `{1}` in a date-time template in one pass, so braces
/// inside the substituted patterns are never re-expanded.
fn substitute(template: &str, time: &str, date: &str) -> String {
    let mut output = String::with_capacity(template.len() + time.len() + date.len());
    let mut rest = template;
    while let Some(position) = rest.find('{') {
        let (head, tail) = rest.split_at(position);
        output.push_str(head);
        if let Some(after) = tail.strip_prefix("{0}") {
            output.push_str(time);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{1}") {
            output.push_str(date);
            rest = after;
        } else {
            output.push('{');
            rest = &tail[1..];
        }
    }
    output.push_str(rest);
    output
}

fn render_year(year: i32, length: usize) -> String {
    let year = if length == 2 { year.rem_euclid(100) } else { year };
    pad(i64::from(year), length)
}

/// Hour on the 1-12 clock: midnight and noon both read 12.
fn hour12(hour: u32) -> u32 {
    if hour % 12 == 0 { 12 } else { hour % 12 }
}

/// Hour on the 1-24 clock: midnight reads 24.
fn hour_in_day(hour: u32) -> u32 {
    if hour == 0 { 24 } else { hour }
}

/// A numeric field capped at two letters: raw at one, zero-padded at two,
/// empty beyond.
fn numeric_field(value: u32, length: usize) -> String {
    match length {
        1 => value.to_string(),
        2 => pad(i64::from(value), 2),
        _ => String::new(),
    }
}

fn pad(value: i64, length: usize) -> String {
    format!("{value:0length$}")
}

fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

fn zone_offset(seconds: i32, separator: &str) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let total_minutes = seconds.unsigned_abs().div_euclid(60);
    let hours = total_minutes.div_euclid(60);
    let minutes = total_minutes.rem_euclid(60);
    format!("{sign}{hours:02}{separator}{minutes:02}")
}

fn zone_name(seconds: i32) -> String {
    if seconds == 0 {
        "UTC".to_string()
    } else {
        format!("GMT{}", zone_offset(seconds, ":"))
    }
}
