//! Page generation.
//!
//! Markdown sources become HTML pages at the same relative path in the
//! output directory, with `.md` swapped for `.html`.

use std::fs;
use std::path::Path;

use galley_markdown::markdown_to_html;

use crate::error::SiteError;
use crate::template::apply_template;
use crate::title::extract_title;

/// Title used when a document has no top-level heading.
const FALLBACK_TITLE: &str = "Untitled";

/// Render one Markdown file through the template and write the result.
///
/// The target's parent directories are created as needed. The page title is
/// the document's first `# ` heading, or "Untitled" without one.
///
/// # Errors
///
/// Fails when the source cannot be read, rendering rejects the document, or
/// the target cannot be written.
pub fn generate_page(source: &Path, template: &str, target: &Path) -> Result<(), SiteError> {
    let markdown = fs::read_to_string(source)?;
    let content = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown).unwrap_or_else(|| FALLBACK_TITLE.to_owned());
    let page = apply_template(template, &title, &content);

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, page)?;

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        "Generated page"
    );
    Ok(())
}

/// Render every Markdown file under the content directory.
///
/// The directory tree is walked recursively. Hidden entries are skipped,
/// files without a `.md` extension are ignored, and each page lands at its
/// source's relative path with an `.html` extension. Returns the number of
/// pages generated.
///
/// # Errors
///
/// Returns [`SiteError::NotFound`] if the content directory does not exist;
/// otherwise fails on the first page that cannot be generated.
pub fn generate_pages(
    content_dir: &Path,
    template: &str,
    output_dir: &Path,
) -> Result<usize, SiteError> {
    if !content_dir.exists() {
        return Err(SiteError::NotFound(content_dir.to_path_buf()));
    }
    generate_directory(content_dir, template, output_dir)
}

fn generate_directory(
    content_dir: &Path,
    template: &str,
    output_dir: &Path,
) -> Result<usize, SiteError> {
    let mut pages = 0;
    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let source = entry.path();
        if entry.file_type()?.is_dir() {
            pages += generate_directory(&source, template, &output_dir.join(&name))?;
        } else if source.extension().is_some_and(|ext| ext == "md") {
            let target = output_dir.join(&name).with_extension("html");
            generate_page(&source, template, &target)?;
            pages += 1;
        }
    }
    Ok(pages)
}
