//! `galley build` command implementation.

use std::path::PathBuf;

use clap::Args;
use galley_config::{CliSettings, Config};
use galley_site::build_site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover galley.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Static assets directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Page template file (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Enable verbose output (show per-page timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the build fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            static_dir: self.static_dir,
            output_dir: self.output_dir,
            template: self.template,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = &config.site_resolved;

        // Print startup info
        output.info(&format!("Content: {}", site.content_dir.display()));
        output.info(&format!("Output: {}", site.output_dir.display()));

        let summary = build_site(site)?;

        output.success(&format!(
            "Built {} pages and copied {} assets to {}",
            summary.pages,
            summary.assets,
            site.output_dir.display()
        ));
        Ok(())
    }
}
