//! Document tree assembly.
//!
//! Each segmented block becomes one child of a root `div` container. Block
//! content is handed to the inline tokenizer except inside code fences,
//! whose text is carried through verbatim.

use crate::block::{BlockKind, classify_block, segment_blocks};
use crate::error::RenderError;
use crate::inline::tokenize_inline;
use crate::node::HtmlNode;
use crate::span::InlineSpan;

/// Build the HTML tree for a whole Markdown document.
///
/// Fails only when an image span is missing its url or alt text; every
/// other input renders, falling back to paragraphs for unrecognized
/// shapes.
pub fn markdown_to_node(document: &str) -> Result<HtmlNode, RenderError> {
    let mut children = Vec::new();
    for block in segment_blocks(document) {
        children.push(block_to_node(block)?);
    }
    Ok(HtmlNode::container("div", children))
}

fn block_to_node(block: &str) -> Result<HtmlNode, RenderError> {
    match classify_block(block) {
        BlockKind::Paragraph => Ok(HtmlNode::container("div", inline_children(block)?)),
        BlockKind::Heading(level) => heading_node(block, level),
        BlockKind::CodeFence => Ok(code_fence_node(block)),
        BlockKind::Quote => quote_node(block),
        BlockKind::UnorderedList => unordered_list_node(block),
        BlockKind::OrderedList => ordered_list_node(block),
    }
}

/// Tokenize block content and map every span to a child node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    tokenize_inline(text).into_iter().map(span_to_node).collect()
}

fn heading_node(block: &str, level: u8) -> Result<HtmlNode, RenderError> {
    // Classification guarantees `level` hashes followed by a space. The
    // rest of the block is the content, line breaks included.
    let content = &block[usize::from(level) + 1..];
    Ok(HtmlNode::container(
        format!("h{level}"),
        inline_children(content)?,
    ))
}

fn code_fence_node(block: &str) -> HtmlNode {
    // Classification guarantees both fence markers are present.
    let inner = &block[3..block.len() - 3];
    let literal = inner.strip_prefix('\n').unwrap_or(inner);
    HtmlNode::container(
        "pre",
        vec![HtmlNode::container("code", vec![HtmlNode::text(literal)])],
    )
}

fn quote_node(block: &str) -> Result<HtmlNode, RenderError> {
    let content = block
        .split('\n')
        .map(strip_quote_prefix)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::container(
        "blockquote",
        inline_children(&content)?,
    ))
}

/// Drop the leading `>` and the one character after it, usually a space.
fn strip_quote_prefix(line: &str) -> &str {
    let mut indices = line.char_indices();
    indices.next();
    indices.next();
    match indices.next() {
        Some((at, _)) => &line[at..],
        None => "",
    }
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, RenderError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        items.push(HtmlNode::container("li", inline_children(&line[2..])?));
    }
    Ok(HtmlNode::container("ul", items))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, RenderError> {
    let mut items = Vec::new();
    for line in block.split('\n') {
        // Classification guarantees the `N. ` marker on every line.
        let text = match line.find('.') {
            Some(dot) => &line[dot + 2..],
            None => line,
        };
        items.push(HtmlNode::container("li", inline_children(text)?));
    }
    Ok(HtmlNode::container("ol", items))
}

/// Map one inline span to its HTML node.
///
/// Formatted spans become containers holding a bare text leaf; links and
/// images become tagged leaves carrying their target as attributes.
fn span_to_node(span: InlineSpan) -> Result<HtmlNode, RenderError> {
    Ok(match span {
        InlineSpan::Plain(text) => HtmlNode::text(text),
        InlineSpan::Bold(text) => wrapped("b", text),
        InlineSpan::Italic(text) => wrapped("i", text),
        InlineSpan::Code(text) => wrapped("code", text),
        InlineSpan::Link { text, url } => {
            HtmlNode::leaf_with_attrs("a", text, vec![("href".to_owned(), url)])
        }
        InlineSpan::Image { alt, url } => {
            if url.is_empty() || alt.is_empty() {
                return Err(RenderError::IncompleteImage { url, alt });
            }
            HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src".to_owned(), url), ("alt".to_owned(), alt)],
            )
        }
    })
}

fn wrapped(tag: &str, text: String) -> HtmlNode {
    HtmlNode::container(tag, vec![HtmlNode::text(text)])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{markdown_to_node, span_to_node};
    use crate::error::RenderError;
    use crate::node::HtmlNode;
    use crate::span::InlineSpan;

    fn render(markdown: &str) -> String {
        markdown_to_node(markdown).unwrap().to_html()
    }

    #[test]
    fn test_empty_document_renders_bare_root() {
        assert_eq!(render(""), "<div></div>");
    }

    #[test]
    fn test_plain_text_round_trip() {
        assert_eq!(render("TEXT"), "<div><div>TEXT</div></div>");
    }

    #[test]
    fn test_paragraphs_keep_line_breaks() {
        let markdown = "\nThis is **bolded** paragraph\ntext in a p\ntag here\n\n\
                        This is another paragraph with _italic_ text and `code` here\n\n";
        assert_eq!(
            render(markdown),
            "<div><div>This is <b>bolded</b> paragraph\ntext in a p\ntag here</div>\
             <div>This is another paragraph with <i>italic</i> text and <code>code</code> here</div></div>"
        );
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(
            render("# Title\n\nSome **bold** text."),
            "<div><h1>Title</h1><div>Some <b>bold</b> text.</div></div>"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            render("# Big\n\n###### Small"),
            "<div><h1>Big</h1><h6>Small</h6></div>"
        );
    }

    #[test]
    fn test_heading_content_spans_lines() {
        assert_eq!(
            render("## Title\nsecond line"),
            "<div><h2>Title\nsecond line</h2></div>"
        );
    }

    #[test]
    fn test_codeblock_keeps_content_verbatim() {
        let markdown = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
        assert_eq!(
            render(markdown),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_codeblock_strips_opening_line_break_only() {
        assert_eq!(
            render("```\nprint('hello')\n```"),
            "<div><pre><code>print('hello')\n</code></pre></div>"
        );
    }

    #[test]
    fn test_single_line_codeblock() {
        assert_eq!(
            render("```inline code```"),
            "<div><pre><code>inline code</code></pre></div>"
        );
    }

    #[test]
    fn test_quote_joins_stripped_lines() {
        assert_eq!(
            render("> quoted\n> lines"),
            "<div><blockquote>quoted\nlines</blockquote></div>"
        );
    }

    #[test]
    fn test_quote_content_tokenized_as_a_whole() {
        assert_eq!(
            render("> **b**\n> plain"),
            "<div><blockquote><b>b</b>\nplain</blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list_items_tokenized() {
        assert_eq!(
            render("- **a**\n- b"),
            "<div><ul><li><b>a</b></li><li>b</li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            render("1. one\n2. two\n3. three"),
            "<div><ol><li>one</li><li>two</li><li>three</li></ol></div>"
        );
    }

    #[test]
    fn test_ordered_list_with_two_digit_markers() {
        let markdown = "1. a\n2. b\n3. c\n4. d\n5. e\n6. f\n7. g\n8. h\n9. i\n10. j";
        let html = render(markdown);
        assert!(html.ends_with("<li>j</li></ol></div>"));
    }

    #[test]
    fn test_numbering_gap_falls_back_to_paragraph() {
        assert_eq!(
            render("1. first\n3. third"),
            "<div><div>1. first\n3. third</div></div>"
        );
    }

    #[test]
    fn test_carriage_returns_survive_in_quote_and_list_content() {
        assert_eq!(
            render("> a\r\n> b"),
            "<div><blockquote>a\r\nb</blockquote></div>"
        );
        assert_eq!(
            render("- x\r\n- y"),
            "<div><ul><li>x\r</li><li>y</li></ul></div>"
        );
        assert_eq!(
            render("1. x\r\n2. y"),
            "<div><ol><li>x\r</li><li>y</li></ol></div>"
        );
    }

    #[test]
    fn test_link_renders_anchor() {
        assert_eq!(
            render("[Click](https://example.com)"),
            "<div><div><a href=\"https://example.com\">Click</a></div></div>"
        );
    }

    #[test]
    fn test_image_renders_tag_pair() {
        assert_eq!(
            render("An ![alt text](img.png) here"),
            "<div><div>An <img src=\"img.png\" alt=\"alt text\"></img> here</div></div>"
        );
    }

    #[test]
    fn test_image_without_url_fails() {
        let err = markdown_to_node("![alt]()").unwrap_err();
        assert_eq!(
            err,
            RenderError::IncompleteImage {
                url: String::new(),
                alt: "alt".to_owned(),
            }
        );
    }

    #[test]
    fn test_span_mapping_shapes() {
        let bold = span_to_node(InlineSpan::Bold("x".to_owned())).unwrap();
        assert_eq!(bold, HtmlNode::container("b", vec![HtmlNode::text("x")]));

        let code = span_to_node(InlineSpan::Code("y".to_owned())).unwrap();
        assert_eq!(code, HtmlNode::container("code", vec![HtmlNode::text("y")]));

        let link = span_to_node(InlineSpan::Link {
            text: "t".to_owned(),
            url: "u".to_owned(),
        })
        .unwrap();
        assert_eq!(
            link,
            HtmlNode::leaf_with_attrs("a", "t", vec![("href".to_owned(), "u".to_owned())])
        );
    }

    #[test]
    fn test_image_span_with_empty_alt_is_rejected() {
        let err = span_to_node(InlineSpan::Image {
            alt: String::new(),
            url: "u.png".to_owned(),
        })
        .unwrap_err();
        assert_eq!(
            err,
            RenderError::IncompleteImage {
                url: "u.png".to_owned(),
                alt: String::new(),
            }
        );
    }
}
