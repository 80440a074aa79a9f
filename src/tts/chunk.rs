//! Split long text into request-sized pieces.
//!
//! The TTS endpoint rejects overly long input, so text is cut at sentence
//! punctuation first, then at whitespace, and only as a last resort in the
//! middle of a word.

/// Longest text accepted in a single request, in characters.
pub const MAX_CHARS: usize = 100;

const SENTENCE_BREAKS: &[char] = &['.', '!', '?', ';', ':', ',', '\u{2026}', '\n'];

pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    text.split_inclusive(SENTENCE_BREAKS)
        .flat_map(|piece| minimize(piece.trim(), max_chars))
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Cut `text` into pieces of at most `max_chars`, preferring whitespace.
fn minimize(text: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut rest = text;

    while rest.chars().count() > max_chars {
        // Byte offset just past the `max_chars`-th character.
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map_or(rest.len(), |(i, _)| i);

        let cut = rest[..limit]
            .rfind(char::is_whitespace)
            .filter(|&i| i > 0)
            .unwrap_or(limit);

        pieces.push(rest[..cut].trim().to_string());
        rest = rest[cut..].trim_start();
    }

    pieces.push(rest.to_string());
    pieces
}
