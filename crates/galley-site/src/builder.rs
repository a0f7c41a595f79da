//! Whole-site builds.

use std::fs;
use std::time::Instant;

use galley_config::SiteConfig;

use crate::assets::copy_assets;
use crate::error::SiteError;
use crate::pages::generate_pages;

/// Convert Duration to milliseconds as f64.
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Counts reported by a completed build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Markdown pages generated.
    pub pages: usize,
    /// Static files copied.
    pub assets: usize,
}

/// Build the whole site into the output directory.
///
/// The template is read up front, the output directory is removed and
/// recreated, static assets are copied in, and every Markdown file under
/// the content directory is rendered through the template.
///
/// # Errors
///
/// Fails when the template, static directory, or content directory is
/// missing, or when any page fails to generate. The output directory may be
/// left partially built on error.
pub fn build_site(site: &SiteConfig) -> Result<BuildSummary, SiteError> {
    let start = Instant::now();

    if !site.template.exists() {
        return Err(SiteError::NotFound(site.template.clone()));
    }
    let template = fs::read_to_string(&site.template)?;

    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)?;
    }
    fs::create_dir_all(&site.output_dir)?;

    let assets = copy_assets(&site.static_dir, &site.output_dir)?;
    let pages = generate_pages(&site.content_dir, &template, &site.output_dir)?;

    tracing::info!(
        pages,
        assets,
        output = %site.output_dir.display(),
        elapsed_ms = elapsed_ms(start),
        "Site built"
    );

    Ok(BuildSummary { pages, assets })
}
