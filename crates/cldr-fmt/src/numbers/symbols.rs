//! Locale number symbols.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// The number symbols of a locale, as found under `numbers/symbols` in
/// CLDR data. Every symbol defaults to its root-locale value, so a partial
/// section deserializes cleanly.
///
/// # Example
///
/// ```
/// use cldr_fmt::numbers::NumberSymbols;
///
/// let de = NumberSymbols::builder().decimal(",").group(".").build();
/// assert_eq!(de.minus_sign, "-");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default, rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct NumberSymbols {
    #[builder(default = ".".to_string())]
    pub decimal: String,
    #[builder(default = ",".to_string())]
    pub group: String,
    #[builder(default = "-".to_string())]
    pub minus_sign: String,
    #[builder(default = "+".to_string())]
    pub plus_sign: String,
    #[builder(default = "%".to_string())]
    pub percent_sign: String,
    #[builder(default = "‰".to_string())]
    pub per_mille: String,
    #[builder(default = "E".to_string())]
    pub exponential: String,
    #[builder(default = "∞".to_string())]
    pub infinity: String,
    #[builder(default = "NaN".to_string())]
    pub nan: String,
    /// Ten digit glyphs replacing 0-9, for locales with native digits.
    pub digits: Option<String>,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self::builder().build()
    }
}
