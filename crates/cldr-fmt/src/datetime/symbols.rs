//! Calendar symbol tables.
//!
//! The shapes here mirror the CLDR `ca-gregorian` sections they deserialize
//! from: name tables keyed by CLDR codes (`"1".."12"` for months, `"mon"`
//! for weekdays, `"am"`/`"pm"` for day periods), pattern tables keyed by
//! width. Every section defaults to empty, so partial fixtures deserialize
//! cleanly; missing names surface later as formatting errors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The symbol tables of one calendar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarSymbols {
    pub months: NameContexts,
    pub days: NameContexts,
    pub quarters: NameContexts,
    pub day_periods: NameContexts,
    pub eras: EraNames,
    pub date_formats: WidthPatterns,
    pub time_formats: WidthPatterns,
    pub date_time_formats: DateTimeFormats,
}

/// A naming table in both contexts: running-text format names and
/// stand-alone names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameContexts {
    pub format: NameWidths,
    #[serde(rename = "stand-alone")]
    pub standalone: NameWidths,
}

/// A naming table at each width.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NameWidths {
    pub abbreviated: HashMap<String, String>,
    pub wide: HashMap<String, String>,
    pub narrow: HashMap<String, String>,
    pub short: HashMap<String, String>,
}

impl NameWidths {
    /// The name table of one width.
    pub fn of(&self, width: NameWidth) -> &HashMap<String, String> {
        match width {
            NameWidth::Abbreviated => &self.abbreviated,
            NameWidth::Wide => &self.wide,
            NameWidth::Narrow => &self.narrow,
            NameWidth::Short => &self.short,
        }
    }
}

/// Era names, keyed `"0"` for the era before the epoch and `"1"` after.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EraNames {
    #[serde(rename = "eraNames")]
    pub names: HashMap<String, String>,
    #[serde(rename = "eraAbbr")]
    pub abbreviated: HashMap<String, String>,
    #[serde(rename = "eraNarrow")]
    pub narrow: HashMap<String, String>,
}

/// Date or time patterns at the four standard widths.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidthPatterns {
    pub full: Option<String>,
    pub long: Option<String>,
    pub medium: Option<String>,
    pub short: Option<String>,
}

impl WidthPatterns {
    /// The pattern of one width, when the locale declares it.
    pub fn of(&self, width: FormatWidth) -> Option<&str> {
        match width {
            FormatWidth::Full => self.full.as_deref(),
            FormatWidth::Long => self.long.as_deref(),
            FormatWidth::Medium => self.medium.as_deref(),
            FormatWidth::Short => self.short.as_deref(),
        }
    }
}

/// The `dateTimeFormats` section: combining templates per width plus the
/// skeleton patterns under `availableFormats`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeFormats {
    #[serde(flatten)]
    pub widths: WidthPatterns,
    #[serde(rename = "availableFormats")]
    pub available_formats: HashMap<String, String>,
}

/// One of the four standard CLDR format widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatWidth {
    Full,
    Long,
    Medium,
    Short,
}

impl FormatWidth {
    /// Parse a width keyword, e.g. `"medium"`.
    pub fn from_keyword(keyword: &str) -> Option<FormatWidth> {
        match keyword {
            "full" => Some(FormatWidth::Full),
            "long" => Some(FormatWidth::Long),
            "medium" => Some(FormatWidth::Medium),
            "short" => Some(FormatWidth::Short),
            _ => None,
        }
    }

    /// The CLDR keyword of this width.
    pub fn keyword(self) -> &'static str {
        match self {
            FormatWidth::Full => "full",
            FormatWidth::Long => "long",
            FormatWidth::Medium => "medium",
            FormatWidth::Short => "short",
        }
    }
}

/// One of the name-table widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameWidth {
    Abbreviated,
    Wide,
    Narrow,
    Short,
}

impl NameWidth {
    /// The CLDR keyword of this width.
    pub fn keyword(self) -> &'static str {
        match self {
            NameWidth::Abbreviated => "abbreviated",
            NameWidth::Wide => "wide",
            NameWidth::Narrow => "narrow",
            NameWidth::Short => "short",
        }
    }
}
