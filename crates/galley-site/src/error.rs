//! Site build errors.

use std::path::PathBuf;

/// Error returned when building the site fails.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A required source path does not exist.
    #[error("Source not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The static assets path is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Markdown rendering failed.
    #[error("{0}")]
    Render(#[from] galley_markdown::RenderError),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
