//! Page title extraction.

/// Title of a document: the first line whose trimmed form is a top-level
/// `# ` heading.
///
/// The text after the marker is trimmed. Returns `None` when no line
/// qualifies; callers pick their own fallback.
#[must_use]
pub fn extract_title(markdown: &str) -> Option<String> {
    for line in markdown.lines() {
        if let Some(rest) = line.trim().strip_prefix("# ") {
            return Some(rest.trim().to_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::extract_title;

    #[test]
    fn test_title_from_first_line() {
        assert_eq!(
            extract_title("# Hello\n\nbody text"),
            Some("Hello".to_owned())
        );
    }

    #[test]
    fn test_title_found_later_in_document() {
        assert_eq!(
            extract_title("intro paragraph\n\n# Actual Title\n\nmore"),
            Some("Actual Title".to_owned())
        );
    }

    #[test]
    fn test_title_trims_surrounding_whitespace() {
        assert_eq!(extract_title("   #  Spaced Out  "), Some("Spaced Out".to_owned()));
    }

    #[test]
    fn test_deeper_headings_do_not_count() {
        assert_eq!(extract_title("## Subtitle\n\ntext"), None);
    }

    #[test]
    fn test_hash_without_space_does_not_count() {
        assert_eq!(extract_title("#tag\n\ntext"), None);
    }

    #[test]
    fn test_bare_marker_line_is_skipped() {
        // "# " trims down to "#", which no longer carries the marker.
        assert_eq!(extract_title("# \n\n# Real"), Some("Real".to_owned()));
    }

    #[test]
    fn test_no_title() {
        assert_eq!(extract_title("just\nprose"), None);
        assert_eq!(extract_title(""), None);
    }
}
