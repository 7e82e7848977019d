//! Locale data access.
//!
//! The formatting engines never read files themselves. They consume plain
//! sections (symbol tables, rule maps, pattern tables) that a
//! [`DataProvider`] hands out by path, so the same engines run against
//! bundled JSON, a network source or test fixtures.

use std::any;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProviderError;

/// A source of CLDR data sections, addressed by slash-separated paths such
/// as `main/fr/numbers/symbols`.
pub trait DataProvider {
    /// Fetch the JSON value of a section.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::SectionNotFound`] when the path has no
    /// data. Callers that have a default may treat that as a soft miss;
    /// everything else is a data bug.
    fn fetch(&self, path: &str) -> Result<Value, ProviderError>;
}

/// An in-memory provider backed by a path map, for seeded data and tests.
///
/// # Example
///
/// ```
/// use cldr_fmt::provider::{DataProvider, StaticProvider};
///
/// let mut provider = StaticProvider::new();
/// provider.insert("main/en/numbers/symbols", serde_json::json!({ "decimal": "." }));
/// assert!(provider.fetch("main/en/numbers/symbols").is_ok());
/// assert!(provider.fetch("main/en/listPatterns").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    sections: HashMap<String, Value>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a section at a path, replacing any previous value.
    pub fn insert(&mut self, path: impl Into<String>, section: Value) {
        self.sections.insert(path.into(), section);
    }
}

impl DataProvider for StaticProvider {
    fn fetch(&self, path: &str) -> Result<Value, ProviderError> {
        self.sections
            .get(path)
            .cloned()
            .ok_or_else(|| ProviderError::SectionNotFound {
                path: path.to_string(),
            })
    }
}

/// Fetch a section and deserialize it into a typed shape.
///
/// # Errors
///
/// Returns [`ProviderError::SectionNotFound`] when the path has no data,
/// and [`ProviderError::UnexpectedShape`] naming the expected type when the
/// JSON does not deserialize into it.
pub fn fetch_as<T: DeserializeOwned>(
    provider: &dyn DataProvider,
    path: &str,
) -> Result<T, ProviderError> {
    let value = provider.fetch(path)?;
    serde_json::from_value(value).map_err(|source| ProviderError::UnexpectedShape {
        path: path.to_string(),
        expected: any::type_name::<T>(),
        source,
    })
}
