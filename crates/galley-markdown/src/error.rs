//! Pipeline errors.

/// Error raised while turning Markdown into an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// An image span is missing its url or alt text. Only images carry this
    /// requirement; links tolerate empty targets.
    #[error("image requires both a url and alt text (url: {url:?}, alt: {alt:?})")]
    IncompleteImage { url: String, alt: String },
}
