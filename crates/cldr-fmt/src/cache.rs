//! Process-wide parse caches keyed by source text.
//!
//! Rule and pattern text repeats constantly across formatting calls, so
//! parse results are cached and shared as [`Arc`]s. Entries are written
//! once and never mutated; when two threads race on the same text, the
//! first entry wins and the loser's parse is dropped. Only successful
//! parses are cached, so a malformed pattern reports its error on every
//! call.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use crate::datetime::{DateTimeToken, tokenize};
use crate::error::ParseError;
use crate::numbers::NumberPattern;
use crate::plurals::Rule;

static GLOBAL_CACHE: LazyLock<PatternCache> = LazyLock::new(PatternCache::new);

/// Shared parse results for plural rules, number patterns and date/time
/// patterns.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use cldr_fmt::PatternCache;
///
/// let cache = PatternCache::new();
/// let first = cache.number_pattern("#,##0.00").unwrap();
/// let second = cache.number_pattern("#,##0.00").unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct PatternCache {
    rules: RwLock<HashMap<String, Arc<Rule>>>,
    number_patterns: RwLock<HashMap<String, Arc<NumberPattern>>>,
    date_patterns: RwLock<HashMap<String, Arc<Vec<DateTimeToken>>>>,
}

impl PatternCache {
    /// An empty cache, for callers that want isolation from the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by the convenience entry points.
    pub fn global() -> &'static PatternCache {
        &GLOBAL_CACHE
    }

    /// The parsed condition of a plural rule text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Rule`] when the condition text is malformed.
    pub fn rule(&self, source: &str) -> Result<Arc<Rule>, ParseError> {
        get_or_parse(&self.rules, source, Rule::parse)
    }

    /// The parsed descriptor of a number pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NumberPattern`] when the pattern is malformed.
    pub fn number_pattern(&self, source: &str) -> Result<Arc<NumberPattern>, ParseError> {
        get_or_parse(&self.number_patterns, source, NumberPattern::parse)
    }

    /// The token sequence of a date/time pattern. Tokenizing accepts any
    /// text, so this lookup is infallible.
    pub fn date_pattern(&self, source: &str) -> Arc<Vec<DateTimeToken>> {
        if let Some(tokens) = self
            .date_patterns
            .read()
            .expect("pattern cache lock poisoned")
            .get(source)
        {
            return Arc::clone(tokens);
        }
        let tokens = Arc::new(tokenize(source));
        let mut guard = self
            .date_patterns
            .write()
            .expect("pattern cache lock poisoned");
        Arc::clone(guard.entry(source.to_string()).or_insert(tokens))
    }

    /// Number of cached entries across the three tables.
    pub fn len(&self) -> usize {
        let rules = self.rules.read().expect("pattern cache lock poisoned").len();
        let numbers = self
            .number_patterns
            .read()
            .expect("pattern cache lock poisoned")
            .len();
        let dates = self
            .date_patterns
            .read()
            .expect("pattern cache lock poisoned")
            .len();
        rules + numbers + dates
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry. Outstanding [`Arc`]s stay valid.
    pub fn clear(&self) {
        self.rules
            .write()
            .expect("pattern cache lock poisoned")
            .clear();
        self.number_patterns
            .write()
            .expect("pattern cache lock poisoned")
            .clear();
        self.date_patterns
            .write()
            .expect("pattern cache lock poisoned")
            .clear();
    }
}

/// Read-probe the table, parse outside the lock, then insert first-wins.
fn get_or_parse<T>(
    table: &RwLock<HashMap<String, Arc<T>>>,
    source: &str,
    parse: impl Fn(&str) -> Result<T, ParseError>,
) -> Result<Arc<T>, ParseError> {
    if let Some(parsed) = table
        .read()
        .expect("pattern cache lock poisoned")
        .get(source)
    {
        return Ok(Arc::clone(parsed));
    }
    let parsed = Arc::new(parse(source)?);
    let mut guard = table.write().expect("pattern cache lock poisoned");
    Ok(Arc::clone(guard.entry(source.to_string()).or_insert(parsed)))
}
