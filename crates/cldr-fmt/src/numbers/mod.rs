//! CLDR number patterns and localized number formatting.

mod format;
mod pattern;
mod symbols;

pub use format::{format_currency, format_currency_with_pattern, format_number, format_with_pattern};
pub use pattern::NumberPattern;
pub use symbols::NumberSymbols;
