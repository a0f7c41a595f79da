//! Standalone reference extraction.
//!
//! These helpers pull link and image targets out of raw text without running
//! the full tokenizer, for callers that only need the references. They share
//! the tokenizer's notion of a well-formed reference, so a reference the
//! tokenizer would reject is skipped here too.

use crate::inline::match_reference;

/// Collect every `![alt](url)` occurrence as an `(alt, url)` pair, in
/// order of appearance.
#[must_use]
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    let mut pairs = Vec::new();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'!' && bytes[i + 1] == b'[' {
            if let Some(reference) = match_reference(bytes, i + 1) {
                pairs.push((
                    text[reference.text].to_owned(),
                    text[reference.url].to_owned(),
                ));
                i = reference.end;
                continue;
            }
        }
        i += 1;
    }
    pairs
}

/// Collect every `[text](url)` occurrence as a `(text, url)` pair, in order
/// of appearance. Image references are not counted as links.
#[must_use]
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    let mut pairs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'[' && (i == 0 || bytes[i - 1] != b'!') {
            if let Some(reference) = match_reference(bytes, i) {
                pairs.push((
                    text[reference.text].to_owned(),
                    text[reference.url].to_owned(),
                ));
                i = reference.end;
                continue;
            }
        }
        i += 1;
    }
    pairs
}
