//! Shared utilities for channel implementations.

/// Split a long message into chunks that respect a platform's character limit.
///
/// Boundaries land on UTF-8 char boundaries. Prefers splitting after a newline
/// when one exists in the chunk.
pub fn split_message(text: &str, max_len: usize) -> Vec<&str> {
    if text.len() <= max_len || max_len == 0 {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + max_len).min(text.len());
        while end > start && !text.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            // A single char wider than max_len; emit it whole.
            end = text[start..]
                .char_indices()
                .nth(1)
                .map_or(text.len(), |(i, _)| start + i);
        }
        let break_at = if end < text.len() {
            text[start..end]
                .rfind('\n')
                .map(|i| start + i + 1)
                .unwrap_or(end)
        } else {
            end
        };
        chunks.push(&text[start..break_at]);
        start = break_at;
    }

    chunks
}
