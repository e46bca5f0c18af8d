//! Show command - renders one article body to stdout

use std::path::Path;

use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr, eyre};
use folio_core::{Config, Layout};
use folio_generator::{HtmlRenderer, JsonRenderer, Render};

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Json,
}

/// Run the show command.
pub fn run(config_path: &Path, slug: &str, format: Format) -> Result<()> {
    tracing::info!(slug, ?format, "Rendering article");

    let config = Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    let article =
        folio_articles::find(slug).ok_or_else(|| eyre!("No article with slug {slug:?}"))?;

    let output = render(&config, &article.layout, format)?;
    print!("{output}");

    Ok(())
}

/// Render a layout in the requested format.
pub fn render(config: &Config, layout: &Layout, format: Format) -> Result<String> {
    let output = match format {
        Format::Html => HtmlRenderer::from_config(&config.build).render(layout),
        Format::Json => JsonRenderer.render(layout).map(|json| json + "\n"),
    };
    output.wrap_err("Failed to render article")
}
