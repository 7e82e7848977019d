//! CLDR plural categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key prefix used by CLDR plural rule sections, e.g. `pluralRule-count-one`.
pub const RULE_COUNT_PREFIX: &str = "pluralRule-count-";

/// One of the six CLDR plural categories.
///
/// Different languages use different subsets: English has `one` and `other`,
/// Russian adds `few` and `many`, and Arabic uses all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories in canonical evaluation order, `other` last.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// The lowercase CLDR name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// Parse a category name, e.g. `"one"`.
    pub fn from_name(name: &str) -> Option<PluralCategory> {
        match name {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "two" => Some(PluralCategory::Two),
            "few" => Some(PluralCategory::Few),
            "many" => Some(PluralCategory::Many),
            "other" => Some(PluralCategory::Other),
            _ => None,
        }
    }

    /// Parse a CLDR rule section key, e.g. `"pluralRule-count-one"`.
    ///
    /// # Example
    ///
    /// ```
    /// use cldr_fmt::plurals::PluralCategory;
    ///
    /// let category = PluralCategory::from_rule_key("pluralRule-count-few");
    /// assert_eq!(category, Some(PluralCategory::Few));
    /// assert_eq!(PluralCategory::from_rule_key("few"), None);
    /// ```
    pub fn from_rule_key(key: &str) -> Option<PluralCategory> {
        key.strip_prefix(RULE_COUNT_PREFIX)
            .and_then(PluralCategory::from_name)
    }

    /// The CLDR rule section key for this category.
    pub fn rule_key(self) -> String {
        format!("{RULE_COUNT_PREFIX}{self}")
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
