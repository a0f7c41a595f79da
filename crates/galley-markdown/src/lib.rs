//! Markdown parsing and HTML rendering.
//!
//! Converts a small, line-oriented Markdown dialect into a tree of
//! [`HtmlNode`]s and renders that tree as HTML text. The pipeline is pure:
//! no I/O, no shared state, and the only failure mode is an image reference
//! without a usable target.
//!
//! The stages are exposed individually for callers that want to stop
//! partway: [`segment_blocks`] and [`classify_block`] for block structure,
//! [`tokenize_inline`] for inline spans, and [`markdown_to_node`] for the
//! assembled tree.
//!
//! ```
//! use galley_markdown::markdown_to_html;
//!
//! let html = markdown_to_html("# Title\n\nHello **world**.")?;
//! assert_eq!(html, "<div><h1>Title</h1><div>Hello <b>world</b>.</div></div>");
//! # Ok::<(), galley_markdown::RenderError>(())
//! ```

mod block;
mod builder;
mod error;
mod extract;
mod inline;
mod node;
mod span;

pub use block::{BlockKind, classify_block, segment_blocks};
pub use builder::markdown_to_node;
pub use error::RenderError;
pub use extract::{extract_images, extract_links};
pub use inline::tokenize_inline;
pub use node::HtmlNode;
pub use span::InlineSpan;

/// Convert a Markdown document straight to HTML text.
pub fn markdown_to_html(document: &str) -> Result<String, RenderError> {
    Ok(markdown_to_node(document)?.to_html())
}
