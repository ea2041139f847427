//! Line classification and string normalization helpers.

/// Characters stripped by the classifying trim and by `WhitespacePolicy::Trim`.
const INI_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0c', '\x0b'];

/// Kind of a single (already trimmed) input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Empty line or a `;`/`#` comment.
    Blank,
    /// `[name]` header; holds the text between the brackets.
    Section(&'a str),
    /// Anything else; must be a `key=value` pair.
    Pair,
}

/// Trim the INI whitespace set from both ends.
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(&INI_WHITESPACE[..])
}

/// Strip a trailing line terminator left over by the line source.
pub(crate) fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Classify a trimmed line.
pub(crate) fn classify(trimmed: &str) -> LineKind<'_> {
    if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
        return LineKind::Blank;
    }

    if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        return LineKind::Section(&trimmed[1..trimmed.len() - 1]);
    }

    LineKind::Pair
}

/// Fold to canonical case.
pub(crate) fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
