//! Form-urlencoded codec for URL query strings.

/// Ordered key/value pairs of a query string.
pub type QueryPairs = Vec<(String, String)>;

/// Parse a query string, with or without a leading `?`.
///
/// Malformed input yields no pairs; it is never an error for the caller.
pub fn parse_query(input: &str) -> QueryPairs {
    let raw = input.strip_prefix('?').unwrap_or(input);
    if raw.is_empty() {
        return Vec::new();
    }
    match serde_html_form::from_str::<QueryPairs>(raw) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed query string");
            Vec::new()
        }
    }
}

/// Render pairs as a query string without the leading `?`.
pub fn render_query(pairs: &[(String, String)]) -> String {
    serde_html_form::to_string(pairs).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to encode query string");
        String::new()
    })
}

/// First value stored under `key`, matching how browsers resolve repeated keys.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
