//! List pattern formatting, "Monday, Tuesday, and Friday".

use bon::Builder;
use serde::{Deserialize, Serialize};

/// The list patterns of one locale, as found in a CLDR
/// `listPattern-type-standard` table. All four patterns are required; a
/// table missing one fails deserialization instead of joining wrongly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct ListPatterns {
    /// Pattern joining exactly two items.
    #[serde(rename = "2")]
    pub two: String,
    /// Pattern joining the first item to the rest.
    pub start: String,
    /// Pattern joining intermediate items.
    pub middle: String,
    /// Pattern joining the last item.
    pub end: String,
}

/// Join items with a locale's list patterns.
///
/// Three or more items fold right to left: the accumulator starts as the
/// last item, the `end` pattern joins the item before it, `middle` joins
/// every intermediate item and `start` joins the first.
///
/// # Example
///
/// ```
/// use cldr_fmt::{ListPatterns, format_list};
///
/// let patterns = ListPatterns::builder()
///     .two("{0} and {1}")
///     .start("{0}, {1}")
///     .middle("{0}, {1}")
///     .end("{0}, and {1}")
///     .build();
/// assert_eq!(format_list::<&str>(&[], &patterns), "");
/// assert_eq!(format_list(&["one"], &patterns), "one");
/// assert_eq!(format_list(&["one", "two"], &patterns), "one and two");
/// assert_eq!(
///     format_list(&["one", "two", "three", "four"], &patterns),
///     "one, two, three, and four",
/// );
/// ```
pub fn format_list<S: AsRef<str>>(items: &[S], patterns: &ListPatterns) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => apply(&patterns.two, first.as_ref(), second.as_ref()),
        _ => {
            let last = items.len() - 1;
            let mut joined = items[last].as_ref().to_string();
            for index in (0..last).rev() {
                let pattern = if index == 0 {
                    &patterns.start
                } else if index + 1 == last {
                    &patterns.end
                } else {
                    &patterns.middle
                };
                joined = apply(pattern, items[index].as_ref(), &joined);
            }
            joined
        }
    }
}

/// Substitute `{0}` and `{1}` in one pass, so placeholder text inside the
/// items is never re-expanded.
fn apply(pattern: &str, first: &str, second: &str) -> String {
    let mut output = String::with_capacity(pattern.len() + first.len() + second.len());
    let mut rest = pattern;
    while let Some(position) = rest.find('{') {
        let (head, tail) = rest.split_at(position);
        output.push_str(head);
        if let Some(after) = tail.strip_prefix("{0}") {
            output.push_str(first);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{1}") {
            output.push_str(second);
            rest = after;
        } else {
            output.push('{');
            rest = &tail[1..];
        }
    }
    output.push_str(rest);
    output
}
