//! Site assembly for Galley.
//!
//! Turns a content directory of Markdown files, a static assets directory,
//! and a page template into a finished site: [`build_site`] clears the
//! output directory, copies assets, and renders every page through the
//! template. The individual steps are exposed for callers that need finer
//! control.

mod assets;
mod builder;
mod error;
mod pages;
mod template;
mod title;

pub use assets::copy_assets;
pub use builder::{BuildSummary, build_site};
pub use error::SiteError;
pub use pages::{generate_page, generate_pages};
pub use template::apply_template;
pub use title::extract_title;
