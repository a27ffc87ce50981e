//! Heuristic structural pre-check for extracted JSON text.

/// Cheap plausibility check run before full deserialization.
///
/// This is a pure predicate, not a parser. It exists to turn a predictable
/// class of malformed model output into a clean "try again" path instead of
/// an opaque parse error. Rejects:
///
/// - empty or whitespace-only input;
/// - text not delimited by `{` ... `}`;
/// - double-escaped newline/tab artifacts (`\\n`, `\\t` as literal
///   four-byte sequences), the signature of an improperly escaped
///   multi-line string;
/// - an odd number of `"` characters, a proxy for an unterminated string.
pub fn is_plausible_json(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    if !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return false;
    }
    if trimmed.contains(r"\\n") || trimmed.contains(r"\\t") {
        return false;
    }
    if trimmed.matches('"').count() % 2 != 0 {
        return false;
    }
    true
}
