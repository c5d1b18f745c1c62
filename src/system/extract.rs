//! Structured value extraction from free-form console output.

use regex::Regex;

/// Apply `pattern` once against `text` and return the first capture group
/// of the first match, trimmed of trailing line-break characters.
///
/// Absence is the only failure signal: a malformed pattern, a pattern
/// without exactly one capture group, or zero matches all return `None`.
/// Callers must decode console output to canonical text before calling
/// (patterns are authored against UTF-8).
pub fn extract(pattern: &str, text: &str) -> Option<String> {
    let regex = Regex::new(pattern).ok()?;
    // captures_len counts the implicit whole-match group
    if regex.captures_len() != 2 {
        return None;
    }
    let caps = regex.captures(text)?;
    let value = caps.get(1)?.as_str();
    Some(value.trim_end_matches(['\r', '\n']).to_string())
}
