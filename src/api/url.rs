//! Immutable query-string builder.

use std::fmt;

/// A request URL under construction.
///
/// Every call to [`modifiers`](QueryUrl::modifiers) returns a new value with
/// `&key=value` pairs appended in the order given. Keys and values are
/// interpolated verbatim; nothing is escaped or validated.
///
/// ```rust
/// use lastfm::api::QueryUrl;
///
/// let url = QueryUrl::new("https://example.org/?")
///     .modifiers([("format", "json")])
///     .modifiers([("limit", 5)]);
/// assert_eq!(url.as_str(), "https://example.org/?&format=json&limit=5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryUrl {
    base: String,
}

impl QueryUrl {
    /// Start from an opaque base string.
    pub fn new<S: Into<String>>(base: S) -> Self {
        Self { base: base.into() }
    }

    /// Return a new builder with each pair appended as `&key=value`.
    pub fn modifiers<I, K, V>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        let mut result = self.base.clone();
        for (key, value) in pairs {
            result.push_str(&format!("&{}={}", key, value));
        }
        Self { base: result }
    }

    /// Shorthand for a single pair.
    pub fn modifier<K: fmt::Display, V: fmt::Display>(&self, key: K, value: V) -> Self {
        self.modifiers([(key, value)])
    }

    /// The built string.
    pub fn as_str(&self) -> &str {
        &self.base
    }
}

impl fmt::Display for QueryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

impl From<QueryUrl> for String {
    fn from(url: QueryUrl) -> Self {
        url.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_append_in_order() {
        let url = QueryUrl::new("base?").modifiers([("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(url.as_str(), "base?&b=2&a=1&c=3");
    }

    #[test]
    fn test_modifiers_leave_base_untouched() {
        let base = QueryUrl::new("base?");
        let extended = base.modifier("k", "v");
        assert_eq!(base.as_str(), "base?");
        assert_eq!(extended.as_str(), "base?&k=v");
    }

    #[test]
    fn test_chained_modifiers_equal_single_call() {
        let base = QueryUrl::new("base?");
        let chained = base.modifier("a", 1).modifier("b", 2);
        let single = base.modifiers([("a", 1), ("b", 2)]);
        assert_eq!(chained, single);
        assert_eq!(chained.to_string(), "base?&a=1&b=2");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let url = QueryUrl::new("?").modifier("artist", "Simon & Garfunkel");
        assert_eq!(url.as_str(), "?&artist=Simon & Garfunkel");
    }

    #[test]
    fn test_empty_modifiers_keep_base() {
        let url = QueryUrl::new("base?").modifiers(Vec::<(&str, &str)>::new());
        assert_eq!(String::from(url), "base?");
    }
}
