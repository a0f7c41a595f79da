//! Page template substitution.

/// Fill a page template with a title and rendered content.
///
/// Every `{{ Title }}` placeholder is replaced by the title and every
/// `{{ Content }}` placeholder by the content, wherever they appear.
/// Anything else in the template passes through untouched.
#[must_use]
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::apply_template;

    #[test]
    fn test_fills_both_placeholders() {
        let template = "<html><head><title>{{ Title }}</title></head>\
                        <body>{{ Content }}</body></html>";
        assert_eq!(
            apply_template(template, "Home", "<div>hi</div>"),
            "<html><head><title>Home</title></head><body><div>hi</div></body></html>"
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let template = "{{ Title }} / {{ Title }}: {{ Content }}";
        assert_eq!(apply_template(template, "T", "C"), "T / T: C");
    }

    #[test]
    fn test_template_without_placeholders_is_unchanged() {
        assert_eq!(apply_template("<p>static</p>", "T", "C"), "<p>static</p>");
    }

    #[test]
    fn test_placeholder_spelling_is_exact() {
        // No internal padding means no substitution.
        assert_eq!(apply_template("{{Title}}", "T", "C"), "{{Title}}");
    }
}
