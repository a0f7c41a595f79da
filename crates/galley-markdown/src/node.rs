//! The rendered HTML tree.

use std::fmt::Write;

/// A node in the HTML tree produced by the builder.
///
/// The shape is enforced at construction: leaves always carry a value and
/// never children, containers always carry a tag and own their children
/// exclusively. Rendering therefore cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A terminal node. Without a tag it renders as its raw value; with one
    /// it renders as `<tag>value</tag>`.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    /// An element wrapping an ordered list of children.
    Container {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A bare text leaf, rendered as its value with no markup.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf with no attributes.
    #[must_use]
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf with attributes, rendered in the given order.
    #[must_use]
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    /// An element node owning its children.
    #[must_use]
    pub fn container(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Container {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Render the tree depth-first into HTML text.
    ///
    /// Values and attribute text are emitted verbatim, without escaping.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        match self {
            Self::Leaf {
                tag: None, value, ..
            } => html.push_str(value),
            Self::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                open_tag(html, tag, attrs);
                html.push_str(value);
                close_tag(html, tag);
            }
            Self::Container {
                tag,
                children,
                attrs,
            } => {
                open_tag(html, tag, attrs);
                for child in children {
                    child.write_html(html);
                }
                close_tag(html, tag);
            }
        }
    }
}

fn open_tag(html: &mut String, tag: &str, attrs: &[(String, String)]) {
    html.push('<');
    html.push_str(tag);
    for (key, value) in attrs {
        let _ = write!(html, " {key}=\"{value}\"");
    }
    html.push('>');
}

fn close_tag(html: &mut String, tag: &str) {
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::HtmlNode;

    #[test]
    fn test_bare_leaf_renders_raw_value() {
        assert_eq!(HtmlNode::text("just text").to_html(), "just text");
    }

    #[test]
    fn test_tagged_leaf_renders_wrapped_value() {
        assert_eq!(HtmlNode::leaf("p", "Hello").to_html(), "<p>Hello</p>");
    }

    #[test]
    fn test_leaf_with_attrs() {
        let node = HtmlNode::leaf_with_attrs(
            "a",
            "Click me!",
            vec![("href".to_owned(), "https://www.google.com".to_owned())],
        );
        assert_eq!(
            node.to_html(),
            "<a href=\"https://www.google.com\">Click me!</a>"
        );
    }

    #[test]
    fn test_attrs_render_in_insertion_order() {
        let node = HtmlNode::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_owned(), "u.png".to_owned()),
                ("alt".to_owned(), "a chart".to_owned()),
            ],
        );
        assert_eq!(node.to_html(), "<img src=\"u.png\" alt=\"a chart\"></img>");
    }

    #[test]
    fn test_container_renders_children_in_order() {
        let node = HtmlNode::container(
            "p",
            vec![
                HtmlNode::leaf("b", "Bold text"),
                HtmlNode::text("Normal text"),
                HtmlNode::leaf("i", "italic text"),
                HtmlNode::text("Normal text"),
            ],
        );
        assert_eq!(
            node.to_html(),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_nested_containers() {
        let node = HtmlNode::container(
            "div",
            vec![HtmlNode::container(
                "span",
                vec![HtmlNode::leaf("b", "grandchild")],
            )],
        );
        assert_eq!(node.to_html(), "<div><span><b>grandchild</b></span></div>");
    }

    #[test]
    fn test_empty_container_renders_tag_pair() {
        let node = HtmlNode::container("div", vec![]);
        assert_eq!(node.to_html(), "<div></div>");
    }

    #[test]
    fn test_values_are_not_escaped() {
        assert_eq!(HtmlNode::text("a < b && c > d").to_html(), "a < b && c > d");
    }
}
