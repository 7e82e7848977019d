//! Error types shared by the formatting engines.

use thiserror::Error;

/// An error that occurred while parsing rule or pattern text.
///
/// Parse errors are surfaced immediately with the offending fragment and the
/// source text; malformed grammar is never guessed around.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A plural rule whose condition text is not valid CLDR rule syntax.
    #[error("malformed plural rule '{rule}': unexpected input at '{fragment}'")]
    Rule { rule: String, fragment: String },

    /// A sample list that is not valid `@integer`/`@decimal` syntax.
    #[error("malformed plural samples '{samples}': unexpected input at '{fragment}'")]
    Samples { samples: String, fragment: String },

    /// A number pattern the pattern grammar does not accept.
    #[error("malformed number pattern '{pattern}': unexpected input at '{fragment}'")]
    NumberPattern { pattern: String, fragment: String },

    /// A numeric text that is not a plain or scientific decimal literal.
    #[error("malformed decimal literal '{text}'")]
    Decimal { text: String },
}

/// An error that occurred while rendering a value with otherwise valid
/// patterns.
///
/// Missing symbol data is fatal for the render call that needed it; nothing
/// is substituted in its place.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A required entry is absent from the locale symbol tables.
    #[error("missing '{key}' in the '{table}' symbol table")]
    MissingSymbols { table: String, key: String },
}

/// An error from the locale data layer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested section does not exist in the locale data.
    ///
    /// Callers treat this as "substitute a default", not as a failure.
    #[error("locale data section '{path}' not found")]
    SectionNotFound { path: String },

    /// The section exists but does not deserialize into the expected shape.
    #[error("locale data section '{path}' does not match {expected}")]
    UnexpectedShape {
        path: String,
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
