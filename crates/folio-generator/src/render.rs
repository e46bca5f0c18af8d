//! Serializers from the content model to an output format.
//!
//! Articles only describe content; a [`Render`] implementation decides what it
//! looks like. [`HtmlRenderer`] produces the body fragment that goes inside the
//! page chrome, [`JsonRenderer`] dumps the document tree.

use std::collections::HashSet;

use folio_core::{Block, Inline, Language, Layout, Title, config::BuildConfig};
use thiserror::Error;
use tracing::warn;

use crate::syntax::SyntaxHighlighter;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Serializes a document to some output format.
pub trait Render {
    fn render(&self, layout: &Layout) -> Result<String>;
}

/// Renders documents to HTML fragments.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    highlighter: Option<SyntaxHighlighter>,
}

impl HtmlRenderer {
    /// Renderer that emits plain, unhighlighted code blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that highlights code samples with the given theme.
    #[must_use]
    pub fn with_highlighting(theme: &str) -> Self {
        let highlighter = SyntaxHighlighter::new(theme);
        if !highlighter.has_theme(theme) {
            warn!(theme, "unknown syntax theme, code will not be highlighted");
        }
        Self {
            highlighter: Some(highlighter),
        }
    }

    /// Renderer configured from the `[build]` section.
    #[must_use]
    pub fn from_config(build: &BuildConfig) -> Self {
        if build.highlight {
            Self::with_highlighting(&build.syntax_theme)
        } else {
            Self::new()
        }
    }

    /// Render the title element.
    pub fn render_title(&self, title: &Title) -> String {
        format!(r#"<h1 class="title">{}</h1>"#, escape_html(&title.text))
    }

    fn render_block(&self, block: &Block, ids: &mut HeadingIds, out: &mut String) {
        match block {
            Block::Heading { level, text } => {
                let tag = level.tag();
                out.push_str(&format!(
                    r#"<{tag} id="{}">{}</{tag}>"#,
                    ids.claim(text),
                    escape_html(text)
                ));
            }
            Block::Paragraph { children } => {
                out.push_str("<p>");
                for child in children {
                    render_inline(child, out);
                }
                out.push_str("</p>");
            }
            Block::Code { language, text } => out.push_str(&self.render_code(*language, text)),
            Block::Quote { children } => {
                out.push_str("<blockquote>\n");
                for child in children {
                    self.render_block(child, ids, out);
                    out.push('\n');
                }
                out.push_str("</blockquote>");
            }
        }
    }

    fn render_code(&self, language: Language, text: &str) -> String {
        let name = language.name();
        if let Some(highlighter) = &self.highlighter {
            match highlighter.highlight(text, language) {
                Ok(html) => {
                    return format!(r#"<div class="code" data-language="{name}">{html}</div>"#);
                }
                Err(e) => warn!(language = name, error = %e, "highlighting failed, emitting plain code"),
            }
        }
        format!(
            r#"<pre class="code" data-language="{name}"><code class="language-{name}">{}</code></pre>"#,
            escape_html(text)
        )
    }
}

impl Render for HtmlRenderer {
    fn render(&self, layout: &Layout) -> Result<String> {
        let mut ids = HeadingIds::default();
        let mut out = self.render_title(&layout.title);
        out.push('\n');
        for block in &layout.body {
            self.render_block(block, &mut ids, &mut out);
            out.push('\n');
        }
        Ok(out)
    }
}

fn render_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text { text } => out.push_str(&escape_html(text)),
        Inline::Term { text } => {
            out.push_str(r#"<code class="term">"#);
            out.push_str(&escape_html(text));
            out.push_str("</code>");
        }
        Inline::Emphasis { children } => {
            out.push_str("<em>");
            for child in children {
                render_inline(child, out);
            }
            out.push_str("</em>");
        }
        Inline::Link { href, children } => {
            out.push_str(&format!(r#"<a href="{}">"#, escape_html(href)));
            for child in children {
                render_inline(child, out);
            }
            out.push_str("</a>");
        }
    }
}

/// Anchor ids for headings, unique within one document.
#[derive(Debug, Default)]
struct HeadingIds {
    issued: HashSet<String>,
}

impl HeadingIds {
    fn claim(&mut self, text: &str) -> String {
        let base = match slug_from_str(text) {
            slug if slug.is_empty() => "section".to_string(),
            slug => slug,
        };

        let mut id = base.clone();
        let mut n = 1;
        while self.issued.contains(&id) {
            n += 1;
            id = format!("{base}-{n}");
        }
        self.issued.insert(id.clone());
        id
    }
}

/// Renders documents as pretty-printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(&self, layout: &Layout) -> Result<String> {
        Ok(serde_json::to_string_pretty(layout)?)
    }
}

/// Generate a URL-safe slug from a string.
pub fn slug_from_str(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
