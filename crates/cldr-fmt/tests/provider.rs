//! Integration tests for the locale data access layer.

use std::collections::HashMap;

use cldr_fmt::numbers::NumberSymbols;
use cldr_fmt::plurals::{PluralCategory, PluralRuleSet};
use cldr_fmt::provider::{DataProvider, StaticProvider, fetch_as};
use cldr_fmt::{ListPatterns, ProviderError};
use serde_json::json;

// =============================================================================
// Section lookup
// =============================================================================

#[test]
fn test_fetch_missing_section() {
    let provider = StaticProvider::new();
    let error = provider.fetch("main/en/numbers/symbols").unwrap_err();
    assert!(matches!(error, ProviderError::SectionNotFound { .. }));
    insta::assert_snapshot!(error, @"locale data section 'main/en/numbers/symbols' not found");
}

#[test]
fn test_fetch_returns_stored_section() {
    let mut provider = StaticProvider::new();
    provider.insert("main/en/listPatterns", json!({ "start": "{0}, {1}" }));
    let section = provider.fetch("main/en/listPatterns").unwrap();
    assert_eq!(section["start"], "{0}, {1}");
}

// =============================================================================
// Typed access
// =============================================================================

#[test]
fn test_fetch_as_typed_section() {
    let mut provider = StaticProvider::new();
    provider.insert("main/de/numbers/symbols", json!({ "decimal": ",", "group": "." }));

    let symbols: NumberSymbols = fetch_as(&provider, "main/de/numbers/symbols").unwrap();
    assert_eq!(symbols.decimal, ",");
    assert_eq!(symbols.group, ".");
    // Fields absent from the section keep their defaults.
    assert_eq!(symbols.nan, "NaN");
}

#[test]
fn test_fetch_as_wrong_shape() {
    let mut provider = StaticProvider::new();
    provider.insert("main/en/listPatterns", json!({ "start": "{0}, {1}" }));
    let error = fetch_as::<ListPatterns>(&provider, "main/en/listPatterns").unwrap_err();
    assert!(matches!(error, ProviderError::UnexpectedShape { .. }));
}

#[test]
fn test_sections_feed_the_engines() {
    let mut provider = StaticProvider::new();
    provider.insert(
        "main/en/plurals",
        json!({
            "pluralRule-count-one": "i = 1 and v = 0 @integer 1",
            "pluralRule-count-other": " @integer 0, 2~16, 100, …"
        }),
    );

    let section: HashMap<String, String> = fetch_as(&provider, "main/en/plurals").unwrap();
    let rules = PluralRuleSet::from_section(&section).unwrap();
    assert_eq!(rules.category_for(1), PluralCategory::One);
    assert_eq!(rules.category_for(4), PluralCategory::Other);
}
