//! Slack link formatting.
//!
//! Slack renders `<url|label>` as a hyperlink. The three characters that
//! delimit this syntax must be percent-encoded inside both parts.

/// Percent-encodes `<`, `>` and `|`, in that order.
///
/// Every other character is left untouched, including `:` and `/`, so
/// URLs stay readable and escaping an already escaped string is harmless.
#[must_use]
pub fn escape(value: &str) -> String {
    value
        .replace('<', "%3C")
        .replace('>', "%3E")
        .replace('|', "%7C")
}

/// Formats a URL and an optional label into Slack link syntax.
///
/// An empty `name` falls back to the escaped `source`.
///
/// # Example
///
/// ```
/// use slackhook::link::create_link;
///
/// assert_eq!(
///     create_link("https://example.com", "Example"),
///     "<https://example.com|Example>"
/// );
/// assert_eq!(create_link("a|b", ""), "<a%7Cb|a%7Cb>");
/// ```
#[must_use]
pub fn create_link(source: &str, name: &str) -> String {
    let source = escape(source);
    let name = if name.is_empty() {
        source.clone()
    } else {
        escape(name)
    };

    format!("<{source}|{name}>")
}
