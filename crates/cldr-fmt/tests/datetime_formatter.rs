//! Integration tests for date/time pattern tokenizing and rendering.
//!
//! The calendar fixture mirrors the shape of a CLDR ca-gregorian.json
//! section, trimmed to the names these tests touch.

use chrono::{DateTime, Datelike, FixedOffset};
use cldr_fmt::datetime::{
    CalendarSymbols, DateTimeFormatter, DateTimeToken, Field, format_datetime, tokenize,
};
use cldr_fmt::{FormatError, PatternCache};
use serde_json::json;

fn symbols() -> CalendarSymbols {
    serde_json::from_value(json!({
        "months": {
            "format": {
                "abbreviated": { "1": "Jan", "3": "Mar", "11": "Nov" },
                "wide": { "1": "January", "3": "March", "11": "November" },
                "narrow": { "3": "M" }
            },
            "stand-alone": {
                "wide": { "3": "March" }
            }
        },
        "days": {
            "format": {
                "abbreviated": { "sun": "Sun", "thu": "Thu" },
                "wide": { "sun": "Sunday", "thu": "Thursday" },
                "narrow": { "thu": "T" },
                "short": { "thu": "Th" }
            },
            "stand-alone": {
                "abbreviated": { "thu": "Thu" },
                "wide": { "thu": "Thursday" }
            }
        },
        "quarters": {
            "format": {
                "abbreviated": { "1": "Q1" },
                "wide": { "1": "1st quarter" }
            }
        },
        "dayPeriods": {
            "format": {
                "abbreviated": { "am": "AM", "pm": "PM" }
            }
        },
        "eras": {
            "eraNames": { "0": "Before Christ", "1": "Anno Domini" },
            "eraAbbr": { "0": "BC", "1": "AD" },
            "eraNarrow": { "0": "B", "1": "A" }
        },
        "dateFormats": {
            "full": "EEEE, MMMM d, y",
            "long": "MMMM d, y",
            "medium": "MMM d, y",
            "short": "M/d/yy"
        },
        "timeFormats": {
            "full": "h:mm:ss a zzzz",
            "long": "h:mm:ss a z",
            "medium": "h:mm:ss a",
            "short": "h:mm a"
        },
        "dateTimeFormats": {
            "full": "{1} 'at' {0}",
            "long": "{1} 'at' {0}",
            "medium": "{1}, {0}",
            "short": "{1}, {0}",
            "availableFormats": {
                "yMd": "M/d/y",
                "Hm": "HH:mm"
            }
        }
    }))
    .unwrap()
}

/// Thursday, March 7th 2024, day-of-year 67, ISO week 10, 16:05:09 UTC.
fn march_7() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-03-07T16:05:09+00:00").unwrap()
}

// =============================================================================
// Tokenizing
// =============================================================================

#[test]
fn test_tokenize_simple_pattern() {
    assert_eq!(
        tokenize("yyyy-MM-dd"),
        vec![
            DateTimeToken::Field {
                field: Field::Year,
                length: 4
            },
            DateTimeToken::Literal("-".into()),
            DateTimeToken::Field {
                field: Field::Month,
                length: 2
            },
            DateTimeToken::Literal("-".into()),
            DateTimeToken::Field {
                field: Field::DayOfMonth,
                length: 2
            },
        ]
    );
}

#[test]
fn test_tokenize_quoted_text() {
    assert_eq!(
        tokenize("'week' w 'of' y"),
        vec![
            DateTimeToken::Literal("week ".into()),
            DateTimeToken::Field {
                field: Field::WeekOfYear,
                length: 1
            },
            DateTimeToken::Literal(" of ".into()),
            DateTimeToken::Field {
                field: Field::Year,
                length: 1
            },
        ]
    );
}

#[test]
fn test_tokenize_double_apostrophe() {
    let tokens = tokenize("h 'o''clock'");
    assert_eq!(tokens[1], DateTimeToken::Literal(" o'clock".into()));
}

#[test]
fn test_tokenize_unknown_letters_pass_through() {
    assert_eq!(
        tokenize("y-XX"),
        vec![
            DateTimeToken::Field {
                field: Field::Year,
                length: 1
            },
            DateTimeToken::Literal("-XX".into()),
        ]
    );
}

// =============================================================================
// Numeric fields
// =============================================================================

#[test]
fn test_render_numeric_fields() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(formatter.format(&datetime, "yyyy-MM-dd").unwrap(), "2024-03-07");
    assert_eq!(formatter.format(&datetime, "y").unwrap(), "2024");
    assert_eq!(formatter.format(&datetime, "yy").unwrap(), "24");
    assert_eq!(formatter.format(&datetime, "M/d").unwrap(), "3/7");
    assert_eq!(formatter.format(&datetime, "D").unwrap(), "67");
    assert_eq!(formatter.format(&datetime, "DDD").unwrap(), "067");
    assert_eq!(formatter.format(&datetime, "w").unwrap(), "10");
    assert_eq!(formatter.format(&datetime, "W").unwrap(), "1");
    assert_eq!(formatter.format(&datetime, "F").unwrap(), "1");
    assert_eq!(formatter.format(&datetime, "Q").unwrap(), "1");
    assert_eq!(formatter.format(&datetime, "QQ").unwrap(), "01");
}

#[test]
fn test_minute_second_padding() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(formatter.format(&datetime, "m:s").unwrap(), "5:9");
    assert_eq!(formatter.format(&datetime, "mm:ss").unwrap(), "05:09");
}

#[test]
fn test_hour_fields_at_boundaries() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let midnight = DateTime::parse_from_rfc3339("2024-03-07T00:00:00+00:00").unwrap();
    let noon = DateTime::parse_from_rfc3339("2024-03-07T12:00:00+00:00").unwrap();
    let evening = march_7();

    assert_eq!(formatter.format(&midnight, "h").unwrap(), "12");
    assert_eq!(formatter.format(&noon, "h").unwrap(), "12");
    assert_eq!(formatter.format(&evening, "h").unwrap(), "4");
    assert_eq!(formatter.format(&evening, "hh").unwrap(), "04");

    assert_eq!(formatter.format(&midnight, "H").unwrap(), "0");
    assert_eq!(formatter.format(&evening, "HH").unwrap(), "16");

    assert_eq!(formatter.format(&midnight, "K").unwrap(), "0");
    assert_eq!(formatter.format(&noon, "K").unwrap(), "0");
    assert_eq!(formatter.format(&evening, "K").unwrap(), "4");

    assert_eq!(formatter.format(&midnight, "k").unwrap(), "24");
    assert_eq!(formatter.format(&noon, "k").unwrap(), "12");
    assert_eq!(formatter.format(&evening, "k").unwrap(), "16");

    assert_eq!(formatter.format(&midnight, "a").unwrap(), "AM");
    assert_eq!(formatter.format(&noon, "a").unwrap(), "PM");
    assert_eq!(formatter.format(&evening, "aaaa").unwrap(), "PM");
}

// =============================================================================
// Named fields
// =============================================================================

#[test]
fn test_render_names() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(formatter.format(&datetime, "MMM").unwrap(), "Mar");
    assert_eq!(formatter.format(&datetime, "MMMM").unwrap(), "March");
    assert_eq!(formatter.format(&datetime, "MMMMM").unwrap(), "M");
    assert_eq!(formatter.format(&datetime, "LLLL").unwrap(), "March");
    assert_eq!(formatter.format(&datetime, "QQQ").unwrap(), "Q1");
    assert_eq!(formatter.format(&datetime, "QQQQ").unwrap(), "1st quarter");
    assert_eq!(formatter.format(&datetime, "G").unwrap(), "AD");
    assert_eq!(formatter.format(&datetime, "GGGG").unwrap(), "Anno Domini");
    assert_eq!(formatter.format(&datetime, "GGGGG").unwrap(), "A");
}

#[test]
fn test_weekday_variants() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(formatter.format(&datetime, "E").unwrap(), "Thu");
    assert_eq!(formatter.format(&datetime, "EEEE").unwrap(), "Thursday");
    assert_eq!(formatter.format(&datetime, "EEEEE").unwrap(), "T");
    assert_eq!(formatter.format(&datetime, "EEEEEE").unwrap(), "Th");

    assert_eq!(formatter.format(&datetime, "c").unwrap(), "4");
    assert_eq!(formatter.format(&datetime, "cc").unwrap(), "");
    assert_eq!(formatter.format(&datetime, "ccc").unwrap(), "Thu");
    assert_eq!(formatter.format(&datetime, "cccc").unwrap(), "Thursday");

    assert_eq!(formatter.format(&datetime, "e").unwrap(), "4");
    assert_eq!(formatter.format(&datetime, "ee").unwrap(), "4");
    assert_eq!(formatter.format(&datetime, "eeee").unwrap(), "Thursday");
}

#[test]
fn test_era_before_epoch() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let ancient = march_7().with_year(-43).unwrap();
    assert_eq!(formatter.format(&ancient, "G").unwrap(), "BC");
}

#[test]
fn test_excessive_lengths_render_empty() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(formatter.format(&datetime, "MMMMMM").unwrap(), "");
    assert_eq!(formatter.format(&datetime, "GGGGGG").unwrap(), "");
    assert_eq!(formatter.format(&datetime, "QQQQQ").unwrap(), "");
    assert_eq!(formatter.format(&datetime, "www").unwrap(), "");
    assert_eq!(formatter.format(&datetime, "ddd").unwrap(), "");
    assert_eq!(formatter.format(&datetime, "DDDD").unwrap(), "");
    assert_eq!(formatter.format(&datetime, "hhh").unwrap(), "");
}

// =============================================================================
// Zones
// =============================================================================

#[test]
fn test_zone_fields() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let utc = march_7();
    let paris = DateTime::parse_from_rfc3339("2024-03-07T16:05:09+01:00").unwrap();
    let kolkata = DateTime::parse_from_rfc3339("2024-03-07T16:05:09+05:30").unwrap();
    let nyc = DateTime::parse_from_rfc3339("2024-03-07T16:05:09-05:00").unwrap();

    assert_eq!(formatter.format(&utc, "z").unwrap(), "UTC");
    assert_eq!(formatter.format(&paris, "z").unwrap(), "GMT+01:00");
    assert_eq!(formatter.format(&kolkata, "zzzz").unwrap(), "GMT+05:30");
    assert_eq!(formatter.format(&nyc, "v").unwrap(), "GMT-05:00");

    assert_eq!(formatter.format(&utc, "Z").unwrap(), "+0000");
    assert_eq!(formatter.format(&paris, "ZZ").unwrap(), "+0100");
    assert_eq!(formatter.format(&nyc, "Z").unwrap(), "-0500");
}

// =============================================================================
// Widths and skeletons
// =============================================================================

#[test]
fn test_width_composition() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(
        formatter.format(&datetime, "full").unwrap(),
        "Thursday, March 7, 2024 at 4:05:09 PM UTC"
    );
    assert_eq!(
        formatter.format(&datetime, "medium").unwrap(),
        "Mar 7, 2024, 4:05:09 PM"
    );
    assert_eq!(formatter.format(&datetime, "short").unwrap(), "3/7/24, 4:05 PM");
}

#[test]
fn test_date_and_time_widths() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(formatter.format_date(&datetime, "long").unwrap(), "March 7, 2024");
    assert_eq!(formatter.format_time(&datetime, "short").unwrap(), "4:05 PM");
    assert_eq!(formatter.format_date(&datetime, "dd.MM.y").unwrap(), "07.03.2024");
}

#[test]
fn test_skeleton_resolution() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let datetime = march_7();

    assert_eq!(formatter.format(&datetime, ":yMd").unwrap(), "3/7/2024");
    assert_eq!(formatter.format(&datetime, ":Hm").unwrap(), "16:05");
}

#[test]
fn test_unknown_skeleton_falls_back_to_text() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    assert_eq!(formatter.resolve_pattern(":Md").unwrap(), "Md");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_symbol_is_fatal() {
    let symbols = symbols();
    let formatter = DateTimeFormatter::new(&symbols);
    let june = DateTime::parse_from_rfc3339("2024-06-10T08:00:00+00:00").unwrap();

    let error = formatter.format(&june, "MMMM").unwrap_err();
    assert!(matches!(error, FormatError::MissingSymbols { .. }));
    insta::assert_snapshot!(error, @"missing '6' in the 'months/format/wide' symbol table");
}

#[test]
fn test_missing_width_pattern_is_fatal() {
    let symbols: CalendarSymbols =
        serde_json::from_value(json!({ "dateFormats": { "full": "y" } })).unwrap();
    let formatter = DateTimeFormatter::new(&symbols);
    let error = formatter.format(&march_7(), "full").unwrap_err();
    assert!(matches!(error, FormatError::MissingSymbols { .. }));
}

// =============================================================================
// Entry points
// =============================================================================

#[test]
fn test_format_datetime_helper() {
    let symbols = symbols();
    assert_eq!(
        format_datetime(&march_7(), "y-MM-dd", &symbols).unwrap(),
        "2024-03-07"
    );
}

#[test]
fn test_formatter_with_private_cache() {
    let symbols = symbols();
    let cache = PatternCache::new();
    let formatter = DateTimeFormatter::with_cache(&symbols, &cache);
    assert!(cache.is_empty());
    formatter.format(&march_7(), "y-MM").unwrap();
    assert_eq!(cache.len(), 1);
}
