//! Inline tokenizer.
//!
//! Raw text is refined through a fixed sequence of delimiter passes, each of
//! which only ever splits the plain text left behind by earlier passes.
//! Formatted spans are never revisited, which is what keeps delimiter
//! characters inside code spans literal.

use std::ops::Range;

use crate::span::InlineSpan;

/// Tokenize one run of inline Markdown into typed spans.
///
/// Passes run in a fixed order: code, image, link, bold, italic. An
/// unmatched delimiter stays literal in the surrounding text, and spans
/// whose display text is empty are dropped from the result.
#[must_use]
pub fn tokenize_inline(text: &str) -> Vec<InlineSpan> {
    let spans = vec![InlineSpan::Plain(text.to_owned())];
    let spans = split_plain(spans, find_code);
    let spans = split_plain(spans, find_image);
    let spans = split_plain(spans, find_link);
    let spans = split_plain(spans, find_bold);
    let spans = split_plain(spans, find_italic);
    spans
        .into_iter()
        .filter(|span| !span.text().is_empty())
        .collect()
}

/// A delimiter match inside plain text: the byte range it consumed and the
/// spans it produced. Empty delimiter pairs consume their range while
/// producing nothing.
struct Claim {
    start: usize,
    end: usize,
    spans: Vec<InlineSpan>,
}

/// Run one delimiter pass over a span sequence.
///
/// Only `Plain` spans are scanned; everything else passes through untouched.
/// Within a plain span, `find` is asked repeatedly for the leftmost claim at
/// or after the cursor, and the text between claims survives as new plain
/// spans.
fn split_plain(spans: Vec<InlineSpan>, find: fn(&str, usize) -> Option<Claim>) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let InlineSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        let mut cursor = 0;
        let mut matched = false;
        while let Some(claim) = find(&text, cursor) {
            matched = true;
            if claim.start > cursor {
                out.push(InlineSpan::Plain(text[cursor..claim.start].to_owned()));
            }
            out.extend(claim.spans);
            cursor = claim.end;
        }
        if !matched {
            out.push(InlineSpan::Plain(text));
        } else if cursor < text.len() {
            out.push(InlineSpan::Plain(text[cursor..].to_owned()));
        }
    }
    out
}

fn find_code(text: &str, from: usize) -> Option<Claim> {
    let (open, close) = find_delimited(text.as_bytes(), from, b'`')?;
    Some(Claim {
        start: open,
        end: close + 1,
        spans: vec![InlineSpan::Code(text[open + 1..close].to_owned())],
    })
}

fn find_italic(text: &str, from: usize) -> Option<Claim> {
    let (open, close) = find_delimited(text.as_bytes(), from, b'_')?;
    Some(Claim {
        start: open,
        end: close + 1,
        spans: vec![InlineSpan::Italic(text[open + 1..close].to_owned())],
    })
}

fn find_bold(text: &str, from: usize) -> Option<Claim> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'*' {
            if let Some(close) = find_bold_close(bytes, i + 2) {
                return Some(Claim {
                    start: i,
                    end: close + 2,
                    spans: split_bold_inner(&text[i + 2..close]),
                });
            }
        }
        i += 1;
    }
    None
}

/// Break the content of a bold run into alternating bold and italic spans.
///
/// `bold _italic_ bold` flattens to three sibling spans rather than a nested
/// structure. Content without italic markers becomes a single bold span, and
/// empty content produces nothing at all.
fn split_bold_inner(inner: &str) -> Vec<InlineSpan> {
    let bytes = inner.as_bytes();
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some((open, close)) = find_delimited(bytes, cursor, b'_') {
        if open > cursor {
            spans.push(InlineSpan::Bold(inner[cursor..open].to_owned()));
        }
        spans.push(InlineSpan::Italic(inner[open + 1..close].to_owned()));
        cursor = close + 1;
    }
    if cursor < inner.len() {
        spans.push(InlineSpan::Bold(inner[cursor..].to_owned()));
    }
    spans
}

fn find_image(text: &str, from: usize) -> Option<Claim> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'!' && bytes[i + 1] == b'[' {
            if let Some(reference) = match_reference(bytes, i + 1) {
                return Some(Claim {
                    start: i,
                    end: reference.end,
                    spans: vec![InlineSpan::Image {
                        alt: text[reference.text].to_owned(),
                        url: text[reference.url].to_owned(),
                    }],
                });
            }
        }
        i += 1;
    }
    None
}

fn find_link(text: &str, from: usize) -> Option<Claim> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        // A bracket preceded by `!` belongs to a (possibly malformed) image.
        if bytes[i] == b'[' && (i == 0 || bytes[i - 1] != b'!') {
            if let Some(reference) = match_reference(bytes, i) {
                return Some(Claim {
                    start: i,
                    end: reference.end,
                    spans: vec![InlineSpan::Link {
                        text: text[reference.text].to_owned(),
                        url: text[reference.url].to_owned(),
                    }],
                });
            }
        }
        i += 1;
    }
    None
}

/// A well-formed `[text](url)` occurrence located in raw text.
pub(crate) struct Reference {
    pub(crate) text: Range<usize>,
    pub(crate) url: Range<usize>,
    /// Byte offset just past the closing parenthesis.
    pub(crate) end: usize,
}

/// Match `[text](url)` with the opening bracket at `open`.
///
/// The bracketed text may not contain brackets and the url may not contain
/// parentheses; both may span line breaks.
pub(crate) fn match_reference(bytes: &[u8], open: usize) -> Option<Reference> {
    let close = scan_segment(bytes, open + 1, b'[', b']')?;
    if bytes.get(close + 1) != Some(&b'(') {
        return None;
    }
    let url_close = scan_segment(bytes, close + 2, b'(', b')')?;
    Some(Reference {
        text: open + 1..close,
        url: close + 2..url_close,
        end: url_close + 1,
    })
}

/// Advance to `closer`, failing on a nested `opener` or end of input.
fn scan_segment(bytes: &[u8], from: usize, opener: u8, closer: u8) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == closer {
            return Some(i);
        }
        if bytes[i] == opener {
            return None;
        }
        i += 1;
    }
    None
}

/// Leftmost single-character delimited run at or after `from`.
///
/// Returns the byte offsets of the opening and closing delimiter. The close
/// must sit on the same line as the open, so these runs never span a line
/// break.
fn find_delimited(bytes: &[u8], from: usize, delim: u8) -> Option<(usize, usize)> {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == delim {
            if let Some(close) = find_on_line(bytes, i + 1, delim) {
                return Some((i, close));
            }
        }
        i += 1;
    }
    None
}

/// Find `needle` at or after `from`, giving up at the first line break.
fn find_on_line(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    for (offset, &byte) in bytes[from..].iter().enumerate() {
        if byte == needle {
            return Some(from + offset);
        }
        if byte == b'\n' {
            return None;
        }
    }
    None
}

/// Find a closing `**` at or after `from`, giving up at the first line break.
fn find_bold_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'\n' {
            return None;
        }
        if bytes[i] == b'*' && bytes[i + 1] == b'*' {
            return Some(i);
        }
        i += 1;
    }
    None
}
