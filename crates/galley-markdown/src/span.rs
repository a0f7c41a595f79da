//! Typed inline content units.

/// One contiguous, typed unit of inline content.
///
/// A tokenized line of Markdown becomes an ordered sequence of spans, each
/// carrying the literal text it displays. Nesting is flattened: a bold run
/// with italic inside yields sibling `Bold` and `Italic` spans rather than
/// a nested structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Unformatted text, carried through verbatim.
    Plain(String),
    /// Text between `**` delimiters.
    Bold(String),
    /// Text between `_` delimiters.
    Italic(String),
    /// Text between backticks. Never re-tokenized, so delimiter characters
    /// inside it stay literal.
    Code(String),
    /// A `[text](url)` reference.
    Link { text: String, url: String },
    /// An `![alt](url)` reference. The alt text doubles as the span's
    /// display text.
    Image { alt: String, url: String },
}

impl InlineSpan {
    /// The display text of the span. For images this is the alt text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Bold(text) | Self::Italic(text) | Self::Code(text) => text,
            Self::Link { text, .. } => text,
            Self::Image { alt, .. } => alt,
        }
    }

    /// The target url, present only for links and images.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } | Self::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InlineSpan;

    #[test]
    fn test_text_returns_display_text() {
        assert_eq!(InlineSpan::Plain("plain".to_owned()).text(), "plain");
        assert_eq!(InlineSpan::Bold("bold".to_owned()).text(), "bold");
        assert_eq!(InlineSpan::Italic("italic".to_owned()).text(), "italic");
        assert_eq!(InlineSpan::Code("code".to_owned()).text(), "code");
        let link = InlineSpan::Link {
            text: "anchor".to_owned(),
            url: "https://example.com".to_owned(),
        };
        assert_eq!(link.text(), "anchor");
        let image = InlineSpan::Image {
            alt: "diagram".to_owned(),
            url: "diagram.png".to_owned(),
        };
        assert_eq!(image.text(), "diagram");
    }

    #[test]
    fn test_url_present_only_for_references() {
        assert_eq!(InlineSpan::Plain("plain".to_owned()).url(), None);
        assert_eq!(InlineSpan::Code("code".to_owned()).url(), None);
        let link = InlineSpan::Link {
            text: "anchor".to_owned(),
            url: "https://example.com".to_owned(),
        };
        assert_eq!(link.url(), Some("https://example.com"));
        let image = InlineSpan::Image {
            alt: "diagram".to_owned(),
            url: "diagram.png".to_owned(),
        };
        assert_eq!(image.url(), Some("diagram.png"));
    }
}
