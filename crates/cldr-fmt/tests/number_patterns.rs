//! Integration tests for number pattern parsing and formatting.

use cldr_fmt::ParseError;
use cldr_fmt::numbers::{
    NumberPattern, NumberSymbols, format_currency, format_currency_with_pattern, format_number,
    format_with_pattern,
};

fn pattern(source: &str) -> NumberPattern {
    NumberPattern::parse(source).unwrap()
}

// =============================================================================
// Pattern parsing
// =============================================================================

#[test]
fn test_standard_pattern_descriptor() {
    let p = pattern("#,##0.###");
    assert_eq!(p.integer_digits, 1);
    assert_eq!(p.primary_grouping, 3);
    assert_eq!(p.secondary_grouping, 0);
    assert_eq!(p.decimal_digits, Some(0));
    assert_eq!(p.max_decimal_digits, 3);
    assert_eq!(p.multiplier, 1);
    assert_eq!(p.positive_prefix, "");
    assert_eq!(p.negative_prefix, "-");
}

#[test]
fn test_pattern_without_decimal_part() {
    let p = pattern("#,##0");
    assert_eq!(p.decimal_digits, None);
    assert_eq!(p.max_decimal_digits, 0);
}

#[test]
fn test_indian_grouping_descriptor() {
    let p = pattern("#,##,##0.00");
    assert_eq!(p.primary_grouping, 3);
    assert_eq!(p.secondary_grouping, 2);
    assert_eq!(p.decimal_digits, Some(2));
}

#[test]
fn test_explicit_negative_subpattern() {
    let p = pattern("#,##0.00;(#,##0.00)");
    assert_eq!(p.positive_prefix, "");
    assert_eq!(p.positive_suffix, "");
    assert_eq!(p.negative_prefix, "(");
    assert_eq!(p.negative_suffix, ")");
}

#[test]
fn test_percent_and_per_mille_multipliers() {
    let p = pattern("#,##0 %");
    assert_eq!(p.multiplier, 100);
    assert_eq!(p.positive_suffix, " %");

    let p = pattern("0‰");
    assert_eq!(p.multiplier, 1000);
}

#[test]
fn test_display_round_trips_source() {
    let p = pattern("¤ #,##0.00");
    assert_eq!(p.source(), "¤ #,##0.00");
    assert_eq!(p.to_string(), "¤ #,##0.00");
}

#[test]
fn test_malformed_patterns_rejected() {
    assert!(matches!(
        NumberPattern::parse("abc"),
        Err(ParseError::NumberPattern { .. })
    ));
    assert!(NumberPattern::parse("0.0,0").is_err());
}

#[test]
fn test_second_decimal_point_reports_fragment() {
    let error = NumberPattern::parse("0.0.0").unwrap_err();
    insta::assert_snapshot!(
        error,
        @"malformed number pattern '0.0.0': unexpected input at '0.0.0'"
    );
}

// =============================================================================
// Grouping and padding
// =============================================================================

#[test]
fn test_grouping() {
    let symbols = NumberSymbols::default();
    let p = pattern("#,##0");
    assert_eq!(format_with_pattern(1_234_567.0, &p, &symbols), "1,234,567");
    assert_eq!(format_with_pattern(1_234.0, &p, &symbols), "1,234");
    assert_eq!(format_with_pattern(123.0, &p, &symbols), "123");
    assert_eq!(format_with_pattern(0.0, &p, &symbols), "0");
}

#[test]
fn test_no_grouping_without_separator() {
    let symbols = NumberSymbols::default();
    assert_eq!(format_with_pattern(1_234_567.0, &pattern("0"), &symbols), "1234567");
}

#[test]
fn test_indian_grouping() {
    let symbols = NumberSymbols::default();
    assert_eq!(
        format_with_pattern(12_345_678.0, &pattern("#,##,##0"), &symbols),
        "1,23,45,678"
    );
}

#[test]
fn test_integer_zero_padding() {
    let symbols = NumberSymbols::default();
    assert_eq!(format_with_pattern(7.0, &pattern("000"), &symbols), "007");
    assert_eq!(format_with_pattern(1_234.0, &pattern("000"), &symbols), "1234");
}

// =============================================================================
// Fraction digits and rounding
// =============================================================================

#[test]
fn test_fraction_padding_and_truncation() {
    let symbols = NumberSymbols::default();
    let p = pattern("0.00");
    assert_eq!(format_with_pattern(3.0, &p, &symbols), "3.00");
    assert_eq!(format_with_pattern(3.14159, &p, &symbols), "3.14");
}

#[test]
fn test_half_away_from_zero() {
    let symbols = NumberSymbols::default();
    assert_eq!(format_with_pattern(0.25, &pattern("0.0"), &symbols), "0.3");
    assert_eq!(format_with_pattern(-0.25, &pattern("0.0"), &symbols), "-0.3");
    assert_eq!(format_with_pattern(9.99, &pattern("0.0"), &symbols), "10.0");
}

#[test]
fn test_no_decimal_part_rounds_to_integer() {
    // A pattern without a decimal part never emits the separator, even for
    // fractional input; the value rounds to an integer instead.
    let symbols = NumberSymbols::default();
    let p = pattern("#,##0");
    assert_eq!(format_with_pattern(3.75, &p, &symbols), "4");
    assert_eq!(format_with_pattern(2.4, &p, &symbols), "2");
    assert_eq!(format_with_pattern(4.0, &p, &symbols), "4");
    assert_eq!(format_with_pattern(1_234.5, &p, &symbols), "1,235");
}

#[test]
fn test_float_noise_is_absorbed() {
    // 4.3 * 100 is 430.00000000000006 in f64; the 14-digit window hides it.
    let symbols = NumberSymbols::default();
    assert_eq!(format_with_pattern(4.3, &pattern("#,##0 %"), &symbols), "430 %");
    assert_eq!(format_with_pattern(0.043, &pattern("#,##0 %"), &symbols), "4 %");
}

// =============================================================================
// Affixes and symbols
// =============================================================================

#[test]
fn test_localized_symbols() {
    let symbols = NumberSymbols::builder()
        .decimal(",")
        .group(" ")
        .minus_sign("−")
        .build();
    assert_eq!(
        format_with_pattern(-1_234.5, &pattern("#,##0.0"), &symbols),
        "−1 234,5"
    );
}

#[test]
fn test_currency_symbol_substitution() {
    let symbols = NumberSymbols::default();
    let p = pattern("¤#,##0.00");
    assert_eq!(format_currency_with_pattern(9.99, &p, &symbols, "€"), "€9.99");
    assert_eq!(format_currency_with_pattern(-9.99, &p, &symbols, "$"), "-$9.99");
}

#[test]
fn test_non_finite_values() {
    let symbols = NumberSymbols::default();
    let p = pattern("0");
    assert_eq!(format_with_pattern(f64::NAN, &p, &symbols), "NaN");
    assert_eq!(format_with_pattern(f64::INFINITY, &p, &symbols), "∞");
    assert_eq!(format_with_pattern(f64::NEG_INFINITY, &p, &symbols), "-∞");
}

#[test]
fn test_digit_transliteration() {
    let symbols = NumberSymbols::builder()
        .decimal("٫")
        .group("٬")
        .digits("٠١٢٣٤٥٦٧٨٩")
        .build();
    assert_eq!(
        format_with_pattern(1_234.5, &pattern("#,##0.0"), &symbols),
        "١٬٢٣٤٫٥"
    );
}

// =============================================================================
// Cached entry points
// =============================================================================

#[test]
fn test_format_number_parses_through_cache() {
    let symbols = NumberSymbols::default();
    assert_eq!(format_number(1_234.5, "#,##0.##", &symbols).unwrap(), "1,234.5");
    assert!(format_number(1.0, "abc", &symbols).is_err());
}

#[test]
fn test_format_currency() {
    let symbols = NumberSymbols::builder().decimal(",").group(".").build();
    assert_eq!(
        format_currency(1_234.56, "#,##0.00 ¤", &symbols, "€").unwrap(),
        "1.234,56 €"
    );
}
