pub mod cache;
pub mod datetime;
pub mod error;
pub mod list;
pub mod numbers;
pub mod plurals;
pub mod provider;

pub use cache::PatternCache;
pub use datetime::{
    CalendarSymbols, DateTimeFormatter, DateTimeToken, Field, format_datetime, tokenize,
};
pub use error::{FormatError, ParseError, ProviderError};
pub use list::{ListPatterns, format_list};
pub use numbers::{NumberPattern, NumberSymbols, format_currency, format_number};
pub use plurals::{PluralCategory, PluralOperands, PluralRuleSet, plural_category};
pub use provider::{DataProvider, StaticProvider, fetch_as};
