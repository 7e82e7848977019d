//! Per-locale plural rule sets.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::PatternCache;
use crate::error::ParseError;
use crate::plurals::category::PluralCategory;
use crate::plurals::operands::PluralOperands;
use crate::plurals::rule::Rule;
use crate::plurals::samples::Samples;

/// The plural rules of one locale, in canonical evaluation order.
///
/// Rules are parsed through the pattern cache at construction. Sample
/// sections are kept as raw text and parsed only on request.
#[derive(Debug, Clone, Default)]
pub struct PluralRuleSet {
    rules: Vec<(PluralCategory, Arc<Rule>)>,
    samples: Vec<(PluralCategory, String)>,
}

impl PluralRuleSet {
    /// Build a rule set from a CLDR plurals section, a map from
    /// `pluralRule-count-*` keys to rule text.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] hit while parsing a rule.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use cldr_fmt::plurals::{PluralCategory, PluralOperands, PluralRuleSet};
    ///
    /// let section = HashMap::from([
    ///     ("pluralRule-count-one".to_string(), "i = 1 and v = 0 @integer 1".to_string()),
    ///     ("pluralRule-count-other".to_string(), "@integer 0, 2~16, 100, …".to_string()),
    /// ]);
    /// let rules = PluralRuleSet::from_section(&section).unwrap();
    /// assert_eq!(rules.category_for(1), PluralCategory::One);
    /// assert_eq!(rules.category_for(5), PluralCategory::Other);
    ///
    /// // "1.0" has a visible fraction digit, so `v = 0` rules it out of `one`.
    /// let decimal: PluralOperands = "1.0".parse().unwrap();
    /// assert_eq!(rules.category_for(decimal), PluralCategory::Other);
    /// ```
    pub fn from_section(section: &HashMap<String, String>) -> Result<Self, ParseError> {
        Self::from_section_with_cache(section, PatternCache::global())
    }

    /// Build a rule set, parsing through a caller-owned cache.
    pub fn from_section_with_cache(
        section: &HashMap<String, String>,
        cache: &PatternCache,
    ) -> Result<Self, ParseError> {
        let mut set = PluralRuleSet::default();
        for category in PluralCategory::ALL {
            let Some(source) = section.get(&category.rule_key()) else {
                continue;
            };
            set.rules.push((category, cache.rule(source)?));
            if let Some(at) = source.find('@') {
                set.samples.push((category, source[at..].to_string()));
            }
        }
        Ok(set)
    }

    /// Select the plural category of a value.
    ///
    /// Rules are tried in the order `zero, one, two, few, many`; `other` is
    /// the fallback when no explicit rule matches.
    pub fn category_for(&self, value: impl Into<PluralOperands>) -> PluralCategory {
        let operands = value.into();
        self.rules
            .iter()
            .find(|(category, rule)| {
                *category != PluralCategory::Other && rule.matches(&operands)
            })
            .map_or(PluralCategory::Other, |(category, _)| *category)
    }

    /// Categories with an explicit rule, in evaluation order.
    pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.rules.iter().map(|(category, _)| *category)
    }

    /// The parsed rule of a category, if the section declared one.
    pub fn rule(&self, category: PluralCategory) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map(|(_, rule)| rule.as_ref())
    }

    /// Parse the sample section of a category.
    ///
    /// Returns `Ok(None)` when the category has no samples or no rule.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Samples`] when the stored sample text is
    /// malformed.
    pub fn samples_for(&self, category: PluralCategory) -> Result<Option<Samples>, ParseError> {
        self.samples
            .iter()
            .find(|(candidate, _)| *candidate == category)
            .map(|(_, text)| Samples::parse(text))
            .transpose()
    }
}

/// Select the plural category of a value under a locale's rules.
pub fn plural_category(value: impl Into<PluralOperands>, rules: &PluralRuleSet) -> PluralCategory {
    rules.category_for(value)
}
