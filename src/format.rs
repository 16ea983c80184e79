//! Human-readable count formatting

/// Format a count with its noun, adding a plural `s` unless the count is one
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
