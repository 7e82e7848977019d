//! CLDR date/time patterns and localized datetime formatting.
//!
//! Patterns follow the Unicode date format pattern conventions: runs of
//! field letters select a field and its presentation, quoted spans pass
//! through as literal text. Rendering works against a calendar's symbol
//! tables and a [`chrono`] datetime with a fixed offset.

mod format;
mod pattern;
mod symbols;

pub use format::{DateTimeFormatter, format_datetime};
pub use pattern::{DateTimeToken, Field, tokenize};
pub use symbols::{
    CalendarSymbols, DateTimeFormats, EraNames, FormatWidth, NameContexts, NameWidth, NameWidths,
    WidthPatterns,
};
