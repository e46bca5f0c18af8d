//! Build command - generates the static site

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::Config;
use folio_generator::{BuildStats, Builder};

/// Run the build command.
///
/// Renders the catalog into the output directory and prints a summary.
pub fn run(
    config_path: &Path,
    output: Option<&Path>,
    base_url: Option<&str>,
    no_highlight: bool,
) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?base_url, no_highlight, "Starting build");

    let config = Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;
    let (config, output_dir) = apply_overrides(config, output, base_url, no_highlight);

    tracing::debug!(?config, "Loaded configuration");

    let articles = folio_articles::catalog();
    let stats = Builder::new(config, &output_dir)
        .build(&articles)
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!(
        "  Sitemap:    {}",
        if stats.sitemap { "written" } else { "skipped" }
    );
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}

/// Apply command-line overrides and resolve the output directory.
pub fn apply_overrides(
    mut config: Config,
    output: Option<&Path>,
    base_url: Option<&str>,
    no_highlight: bool,
) -> (Config, PathBuf) {
    if let Some(output) = output {
        config.build.output_dir = output.to_string_lossy().to_string();
    }

    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        config.site.base_url = url.to_string();
    }

    if no_highlight {
        config.build.highlight = false;
    }

    let output_dir = PathBuf::from(&config.build.output_dir);
    (config, output_dir)
}
