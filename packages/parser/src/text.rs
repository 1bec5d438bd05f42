//! Character-offset helpers.
//!
//! Node offsets count Unicode scalar values, while Rust strings are indexed
//! by byte. These helpers do the conversion.

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the character at `char_index`, or `s.len()` past the end
pub fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(index, _)| index)
}

/// Characters `start..end` of `s`, clamped to the string
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let from = byte_index(s, start);
    let to = byte_index(s, end).max(from);
    &s[from..to]
}

/// `s` with `insert` placed before the character at `at`
pub fn splice(s: &str, at: usize, insert: &str) -> String {
    let index = byte_index(s, at);
    let mut out = String::with_capacity(s.len() + insert.len());
    out.push_str(&s[..index]);
    out.push_str(insert);
    out.push_str(&s[index..]);
    out
}

/// `s` without characters `start..end`
pub fn cut(s: &str, start: usize, end: usize) -> String {
    let from = byte_index(s, start);
    let to = byte_index(s, end).max(from);
    let mut out = String::with_capacity(s.len() - (to - from));
    out.push_str(&s[..from]);
    out.push_str(&s[to..]);
    out
}
