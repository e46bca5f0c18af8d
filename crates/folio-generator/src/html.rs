//! HTML generation for whole pages.
//!
//! Wraps rendered article bodies in the shared site chrome.

use std::path::{Path, PathBuf};

use folio_core::{Article, Config};
use thiserror::Error;
use tracing::debug;

use crate::{
    render::{HtmlRenderer, Render, RenderError, escape_html},
    template::{PageTemplate, TemplateContext, TemplateError},
};

/// Characters of the first paragraph used as a page summary.
pub const SUMMARY_CHARS: usize = 200;

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Body rendering error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    renderer: HtmlRenderer,
    config: Config,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            renderer: HtmlRenderer::from_config(&config.build),
            config,
        }
    }

    /// Generate the full HTML document for an article.
    pub fn generate_article(&self, article: &Article) -> Result<String> {
        debug!(slug = %article.slug, "generating HTML for article");

        let body = self.renderer.render(&article.layout)?;
        let inner_ctx = TemplateContext::new().with_var("content", body);
        let inner_html = PageTemplate::Article.render(&inner_ctx)?;

        let mut ctx = self
            .base_context(
                &escape_html(article.title()),
                &self.config.url_for(&article.url_path()),
                inner_html,
            )
            .with_var(
                "site_title_suffix",
                format!(" | {}", escape_html(&self.config.site.title)),
            );
        if let Some(summary) = article.layout.summary(SUMMARY_CHARS) {
            ctx.insert("description", escape_html(&summary));
        }

        Ok(PageTemplate::Base.render(&ctx)?)
    }

    /// Generate the home page listing every article in order.
    pub fn generate_index(&self, articles: &[Article]) -> Result<String> {
        debug!(count = articles.len(), "generating index page");

        let items: String = articles.iter().map(list_item_html).collect();
        let inner_ctx = TemplateContext::new().with_var("items", items);
        let inner_html = PageTemplate::Index.render(&inner_ctx)?;

        let mut ctx = self.base_context(
            &escape_html(&self.config.site.title),
            &self.config.url_for("/"),
            inner_html,
        );
        if let Some(description) = &self.config.site.description {
            ctx.insert("description", escape_html(description));
        }

        Ok(PageTemplate::Base.render(&ctx)?)
    }

    fn base_context(&self, title: &str, canonical_url: &str, content: String) -> TemplateContext {
        let site = &self.config.site;
        let mut ctx = TemplateContext::new()
            .with_var("lang", escape_html(&site.language))
            .with_var("title", title)
            .with_var("canonical_url", escape_html(canonical_url))
            .with_var("content", content)
            .with_var("site_title", escape_html(&site.title));

        if let Some(author) = &site.author {
            let author = escape_html(author);
            ctx.insert("author_suffix", format!(" by {author}"));
            ctx.insert("author", author);
        }
        ctx
    }

    /// Output file for an article: `<output_dir>/<slug>/index.html`.
    pub fn output_path(&self, article: &Article, output_dir: &Path) -> PathBuf {
        output_dir.join(&article.slug).join("index.html")
    }
}

/// Generate HTML for one entry of the index list.
pub fn list_item_html(article: &Article) -> String {
    let summary_html = article
        .layout
        .summary(SUMMARY_CHARS)
        .map(|s| format!("\n        <p>{}</p>", escape_html(&s)))
        .unwrap_or_default();

    format!(
        "    <li>\n        <a href=\"{}\">{}</a>{}\n    </li>\n",
        escape_html(&article.url_path()),
        escape_html(article.title()),
        summary_html
    )
}

#[cfg(test)]
mod tests {
    use folio_core::{
        HeadingLevel, Language,
        config::{BuildConfig, SiteConfig},
        primitives::{code, heading, layout, paragraph, title},
    };

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                title: "Test Site".to_string(),
                base_url: "https://example.com".to_string(),
                description: Some("Essays".to_string()),
                author: Some("A & B".to_string()),
                language: "en".to_string(),
            },
            build: BuildConfig {
                highlight: false,
                ..BuildConfig::default()
            },
        }
    }

    fn test_article() -> Article {
        Article::new(
            "test-article",
            layout(
                title("Side <Effects>"),
                [
                    paragraph(["Functions are algebraic."]),
                    heading(HeadingLevel::H2, "Y"),
                    code(Language::Javascript, "f(x) = 2x"),
                ],
            ),
        )
    }

    #[test]
    fn test_generate_article() {
        let generator = HtmlGenerator::new(test_config());
        let html = generator.generate_article(&test_article()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Side &lt;Effects&gt; | Test Site</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/test-article/">"#));
        assert!(html.contains(r#"<meta name="description" content="Functions are algebraic.">"#));
        assert!(html.contains(r#"<meta name="author" content="A &amp; B">"#));
        assert!(html.contains(r#"<h1 class="title">Side &lt;Effects&gt;</h1>"#));
        assert!(html.contains(r#"<h2 id="y">Y</h2>"#));
        assert!(html.contains(r#"<code class="language-javascript">f(x) = 2x</code>"#));
        assert_eq!(html.matches(r#"class="title""#).count(), 1);
    }

    #[test]
    fn test_generate_article_is_deterministic() {
        let generator = HtmlGenerator::new(test_config());
        let article = test_article();
        assert_eq!(
            generator.generate_article(&article).unwrap(),
            generator.generate_article(&article).unwrap()
        );
    }

    #[test]
    fn test_generate_index() {
        let generator = HtmlGenerator::new(test_config());
        let second = Article::new("second", layout(title("Second"), []));
        let html = generator
            .generate_index(&[test_article(), second])
            .unwrap();

        assert!(html.contains("<title>Test Site</title>"));
        assert!(html.contains(r#"<meta name="description" content="Essays">"#));
        let first_pos = html.find(r#"<a href="/test-article/">"#).unwrap();
        let second_pos = html.find(r#"<a href="/second/">Second</a>"#).unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn test_list_item_html() {
        let html = list_item_html(&test_article());
        assert!(html.contains(r#"<a href="/test-article/">Side &lt;Effects&gt;</a>"#));
        assert!(html.contains("<p>Functions are algebraic.</p>"));

        let bare = list_item_html(&Article::new("bare", layout(title("Bare"), [])));
        assert!(!bare.contains("<p>"));
    }

    #[test]
    fn test_output_path() {
        let generator = HtmlGenerator::new(test_config());
        let path = generator.output_path(&test_article(), Path::new("public"));
        assert_eq!(path, PathBuf::from("public/test-article/index.html"));
    }
}
