//! Build orchestration.
//!
//! Coordinates the full site build process.

use std::{
    collections::HashSet,
    fs,
    path::PathBuf,
    time::Instant,
};

use folio_core::{Article, Config};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    html::{HtmlError, HtmlGenerator},
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// Two articles claim the same output path.
    #[error("duplicate article slug: {0}")]
    DuplicateSlug(String),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of article pages generated.
    pub pages: usize,

    /// Whether `sitemap.xml` was written.
    pub sitemap: bool,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    output_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            output_dir: output_dir.into(),
        }
    }

    /// Execute the full build process for the given articles.
    pub fn build(&self, articles: &[Article]) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            output = %self.output_dir.display(),
            articles = articles.len(),
            "starting build"
        );

        // 1. Reject slug collisions before touching the filesystem
        check_unique_slugs(articles)?;

        // 2. Clean output directory
        self.clean_output()?;

        // 3. Generate article pages
        let generator = HtmlGenerator::new(self.config.clone());
        stats.pages = self.generate_pages(&generator, articles)?;

        // 4. Generate index page
        self.generate_index(&generator, articles)?;

        // 5. Generate sitemap
        if self.config.build.sitemap {
            self.generate_sitemap(articles)?;
            stats.sitemap = true;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            sitemap = stats.sitemap,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Render and write every article page. Stops at the first failure.
    fn generate_pages(&self, generator: &HtmlGenerator, articles: &[Article]) -> Result<usize> {
        info!(count = articles.len(), "generating article pages");

        articles
            .par_iter()
            .map(|article| {
                let html = generator.generate_article(article)?;
                let output_path = generator.output_path(article, &self.output_dir);

                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&output_path, &html)?;

                debug!(path = %output_path.display(), "wrote page");
                Ok::<_, BuildError>(())
            })
            .collect::<Result<Vec<()>>>()
            .map(|written| written.len())
    }

    fn generate_index(&self, generator: &HtmlGenerator, articles: &[Article]) -> Result<()> {
        let html = generator.generate_index(articles)?;
        let output_path = self.output_dir.join("index.html");
        fs::write(&output_path, html)?;

        debug!(path = %output_path.display(), "wrote index");
        Ok(())
    }

    /// Generate sitemap.
    fn generate_sitemap(&self, articles: &[Article]) -> Result<()> {
        let generator = SitemapGenerator::new(self.config.clone());
        let output_path = self.output_dir.join("sitemap.xml");
        let mut file = fs::File::create(&output_path)?;
        generator.write_to(articles, &mut file)?;

        info!(path = %output_path.display(), "generated sitemap");
        Ok(())
    }
}

fn check_unique_slugs(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::new();
    for article in articles {
        if !seen.insert(article.slug.as_str()) {
            return Err(BuildError::DuplicateSlug(article.slug.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use folio_core::{
        HeadingLevel, Language,
        config::{BuildConfig, SiteConfig},
        primitives::{code, heading, layout, paragraph, title},
    };
    use tempfile::TempDir;

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                title: "Test Site".to_string(),
                base_url: "https://example.com".to_string(),
                ..SiteConfig::default()
            },
            build: BuildConfig {
                highlight: false,
                ..BuildConfig::default()
            },
        }
    }

    fn article(slug: &str) -> Article {
        Article::new(
            slug,
            layout(
                title("X"),
                [
                    heading(HeadingLevel::H2, "Y"),
                    paragraph(["hello"]),
                    code(Language::Javascript, "f(x) = 2x"),
                ],
            ),
        )
    }

    #[test]
    fn test_build_empty_site() {
        let output_dir = TempDir::new().unwrap();
        let builder = Builder::new(test_config(), output_dir.path());

        let stats = builder.build(&[]).unwrap();

        assert_eq!(stats.pages, 0);
        assert!(stats.sitemap);
        assert!(output_dir.path().join("index.html").exists());
        assert!(output_dir.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_with_articles() {
        let output_dir = TempDir::new().unwrap();
        let builder = Builder::new(test_config(), output_dir.path());

        let stats = builder.build(&[article("first"), article("second")]).unwrap();

        assert_eq!(stats.pages, 2);
        let html = fs::read_to_string(output_dir.path().join("first/index.html")).unwrap();
        assert!(html.contains(r#"<h1 class="title">X</h1>"#));
        assert!(output_dir.path().join("second/index.html").exists());

        let index = fs::read_to_string(output_dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"<a href="/first/">X</a>"#));
    }

    #[test]
    fn test_build_cleans_stale_output() {
        let output_dir = TempDir::new().unwrap();
        let stale = output_dir.path().join("removed-article/index.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        Builder::new(test_config(), output_dir.path())
            .build(&[article("first")])
            .unwrap();

        assert!(!stale.exists());
    }

    #[test]
    fn test_build_without_sitemap() {
        let output_dir = TempDir::new().unwrap();
        let mut config = test_config();
        config.build.sitemap = false;

        let stats = Builder::new(config, output_dir.path())
            .build(&[article("first")])
            .unwrap();

        assert!(!stats.sitemap);
        assert!(!output_dir.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let output_dir = TempDir::new().unwrap();
        let builder = Builder::new(test_config(), output_dir.path());

        let result = builder.build(&[article("same"), article("same")]);
        assert!(matches!(result, Err(BuildError::DuplicateSlug(ref slug)) if slug == "same"));
    }

    #[test]
    fn test_build_is_reproducible() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let articles = [article("a"), article("b")];

        Builder::new(test_config(), first.path()).build(&articles).unwrap();
        Builder::new(test_config(), second.path()).build(&articles).unwrap();

        for file in ["index.html", "a/index.html", "b/index.html", "sitemap.xml"] {
            assert_eq!(
                fs::read(first.path().join(file)).unwrap(),
                fs::read(second.path().join(file)).unwrap(),
                "{file} differs between builds"
            );
        }
    }
}
