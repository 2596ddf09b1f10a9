/// Check if a character acts as a word boundary.
/// The separator set is whitespace, hyphen and underscore; digits are ordinary
/// token characters.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Split trimmed input into word tokens.
/// A maximal run of separator characters counts as a single split point, so
/// consecutive separators of any mix never produce empty tokens. Token casing
/// is left untouched here; the renderer normalizes it.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.trim()
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}
