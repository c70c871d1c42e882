//! Free-text location query normalization.

/// Normalize a raw location string into a canonical matching token.
///
/// Users pick locations from suggestions shaped like "London (LHR)", but
/// can also type anything. Normalization strips a trailing parenthetical
/// code, trims surrounding whitespace, and lower-cases the rest, so that
/// matching is case-insensitive and tolerant of either form.
///
/// Total: never fails, and the empty string maps to the empty token
/// (meaning "no location filter").
///
/// # Examples
///
/// ```
/// use fare_server::search::normalize;
///
/// assert_eq!(normalize("London (LHR)"), "london");
/// assert_eq!(normalize("  New York "), "new york");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let without_code = match raw.find('(') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    without_code.trim().to_lowercase()
}
