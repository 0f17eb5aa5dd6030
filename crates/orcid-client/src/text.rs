//! Text normalization for extracted fields
//!
//! Titles and journal names in the feed may carry escaped entities,
//! embedded markup (`<i>`, `<sub>`, ...) and hard-wrapped whitespace.
//! `normalize` flattens all of that to plain single-line text. Dates
//! and identifiers are plain tokens and are not normalized.

/// Entities decoded by the single left-to-right pass.
const ENTITIES: &[(&str, char)] = &[
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&amp;", '&'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&apos;", '\''),
    ("&nbsp;", ' '),
];

/// Decode escaped entities and strip embedded markup in one pass.
///
/// Only a raw `<` opens a tag; a `<` produced by decoding `&lt;` is
/// literal text and never starts a tag. Entities are decoded exactly
/// once, so `&amp;lt;` becomes the literal `&lt;`. An unterminated
/// tag swallows the rest of the input.
fn decode_and_strip(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let rest = &raw[i..];
        if rest.starts_with('<') {
            match rest.find('>') {
                Some(end) => i += end + 1,
                None => break,
            }
        } else if rest.starts_with('&') {
            if let Some((entity, decoded)) = ENTITIES
                .iter()
                .copied()
                .find(|(entity, _)| rest.starts_with(entity))
            {
                out.push(decoded);
                i += entity.len();
            } else {
                out.push('&');
                i += 1;
            }
        } else if let Some(ch) = rest.chars().next() {
            out.push(ch);
            i += ch.len_utf8();
        }
    }

    out
}

/// Normalize a raw extracted field to trimmed, single-spaced plain text.
pub fn normalize(raw: &str) -> String {
    decode_and_strip(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
