//! Text bounding helpers

/// Truncate `text` to at most `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes, so a multi-byte character is
/// never split. Returns the input unchanged when it is already short enough.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Owned variant of [`truncate_chars`] that avoids reallocating when no cut is needed.
pub fn truncate_owned(mut text: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_idx);
    }
    text
}
