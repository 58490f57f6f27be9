//! Environment variable name normalization.

const SEPARATOR: char = '_';

/// Canonical form of a variable name, without any prefix.
///
/// Trims surrounding whitespace, upper-cases, collapses runs of spaces and
/// turns the remaining spaces into underscores: `" foo  bar "` becomes
/// `"FOO_BAR"`. Only the ASCII space is collapsed; other interior
/// whitespace is kept as is.
pub fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let mut out = String::with_capacity(upper.len());
    let mut prev_space = false;
    for ch in upper.chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(SEPARATOR);
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out
}

/// Normalizes a prefix and terminates it with `_` unless empty.
pub(crate) fn normalize_prefix(raw: &str) -> String {
    let mut prefix = normalize(raw);
    if !prefix.is_empty() && !prefix.ends_with(SEPARATOR) {
        prefix.push(SEPARATOR);
    }
    prefix
}

/// Empty keys stay empty so they never resolve to the bare prefix.
pub(crate) fn prefixed(prefix: &str, raw: &str) -> String {
    let key = normalize(raw);
    if key.is_empty() || prefix.is_empty() {
        return key;
    }
    format!("{prefix}{key}")
}
