//! Helpers for backslash-separated namespace paths (`App\Services\Mailer`).

use crate::is_identifier;

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Check whether a type reference is namespace-qualified.
pub fn has_namespace(path: &str) -> bool {
    path.contains(NAMESPACE_SEPARATOR)
}

/// Return the text after the last occurrence of `separator`, or the whole
/// string when the separator does not occur.
pub fn after_last(s: &str, separator: char) -> &str {
    match s.rfind(separator) {
        Some(index) => &s[index + separator.len_utf8()..],
        None => s,
    }
}

/// Check whether `s` is a valid class path: identifiers joined by `\`, with
/// an optional leading `\`.
pub fn is_type_path(s: &str) -> bool {
    let s = s.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(s);
    !s.is_empty() && s.split(NAMESPACE_SEPARATOR).all(is_identifier)
}
