//! Chunker module
//!
//! Splits the full status text into contiguous windows of at most
//! `max_length` characters. Windows are counted in characters, not bytes,
//! so non-ASCII status text never splits inside a code point.

/// Raw windows, untrimmed. Concatenating them reconstructs `text` exactly.
pub fn windows(text: &str, max_length: usize) -> impl Iterator<Item = String> {
    debug_assert!(max_length > 0, "window length must be positive");
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    (0..len).step_by(max_length.max(1)).map(move |start| {
        let end = (start + max_length).min(len);
        chars[start..end].iter().collect()
    })
}

/// The windows with surrounding whitespace trimmed independently per window.
/// Empty input yields an empty sequence; each call starts a fresh traversal.
pub fn chunk_text(text: &str, max_length: usize) -> impl Iterator<Item = String> {
    windows(text, max_length).map(|w| w.trim().to_string())
}
