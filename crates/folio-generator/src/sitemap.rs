//! Sitemap generation.
//!
//! Generates XML sitemaps for search engine optimization.

use std::io::Write;

use folio_core::{Article, Config};
use thiserror::Error;
use tracing::debug;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate sitemap XML: the home page followed by every article.
    pub fn generate(&self, articles: &[Article]) -> String {
        debug!(count = articles.len(), "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        xml.push_str(&url_entry(&self.config.url_for("/"), "weekly", 1.0));
        for article in articles {
            let loc = self.config.url_for(&article.url_path());
            xml.push_str(&url_entry(&loc, "yearly", 0.8));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to a writer.
    pub fn write_to<W: Write>(&self, articles: &[Article], writer: &mut W) -> Result<()> {
        writer.write_all(self.generate(articles).as_bytes())?;
        Ok(())
    }
}

fn url_entry(loc: &str, changefreq: &str, priority: f32) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority:.1}</priority>\n  </url>\n",
        escape_xml(loc)
    )
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use folio_core::{
        config::SiteConfig,
        primitives::{layout, title},
    };

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                base_url: "https://example.com".to_string(),
                ..SiteConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_generate_sitemap() {
        let generator = SitemapGenerator::new(test_config());
        let articles = vec![
            Article::new("conceptual-engineering", layout(title("A"), [])),
            Article::new("side-effects-complect", layout(title("B"), [])),
        ];

        let xml = generator.generate(&articles);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<loc>https://example.com/conceptual-engineering/</loc>"));
        assert!(xml.contains("<loc>https://example.com/side-effects-complect/</loc>"));
        assert_eq!(xml.matches("<url>").count(), 3);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_write_to() {
        let generator = SitemapGenerator::new(test_config());
        let mut buf = Vec::new();
        generator.write_to(&[], &mut buf).unwrap();

        let xml = String::from_utf8(buf).unwrap();
        assert_eq!(xml.matches("<url>").count(), 1);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }
}
