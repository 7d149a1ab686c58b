//! Tokenization for suggestion highlighting.
//!
//! Resume content carries a double-asterisk convention for bold spans
//! (`**shipped**`). A paired span is one indivisible token (internal spaces
//! included), so `**cut latency**` is compared and highlighted as a unit.

/// Paired emphasis marker delimiting a bold span.
pub const BOLD_MARKER: &str = "**";

/// Collapses internal whitespace runs to a single space and trims the ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits text into tokens after normalization.
///
/// A paired `**...**` span is emitted as one token with its markers intact;
/// everything else splits on single spaces. An unpaired marker has no special
/// meaning and falls through to word splitting. Empty tokens are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut tokens = Vec::new();
    let mut rest = normalized.as_str();

    loop {
        let span = rest.find(BOLD_MARKER).and_then(|start| {
            let body = start + BOLD_MARKER.len();
            rest[body..]
                .find(BOLD_MARKER)
                .map(|len| (start, body + len + BOLD_MARKER.len()))
        });

        match span {
            Some((start, end)) => {
                push_words(&rest[..start], &mut tokens);
                tokens.push(rest[start..end].to_string());
                rest = &rest[end..];
            }
            None => {
                push_words(rest, &mut tokens);
                return tokens;
            }
        }
    }
}

fn push_words(segment: &str, tokens: &mut Vec<String>) {
    tokens.extend(segment.split(' ').filter(|w| !w.is_empty()).map(String::from));
}

/// Strips paired bold markers from a token. Returns the cleaned text and
/// whether the token was marker-delimited.
pub fn strip_markers(token: &str) -> (&str, bool) {
    match token
        .strip_prefix(BOLD_MARKER)
        .and_then(|t| t.strip_suffix(BOLD_MARKER))
    {
        Some(clean) => (clean, true),
        None => (token, false),
    }
}
