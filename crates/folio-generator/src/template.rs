//! Page templates.
//!
//! Templates are static strings with `{{ name }}` placeholders. `{{ name? }}`
//! renders as nothing when the variable is unset.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A required placeholder has no value.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// A `{{` with no matching `}}`.
    #[error("unclosed placeholder near {0:?}")]
    Unclosed(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables for one render. Values go in as-is, so callers escape text first.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// The built-in page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTemplate {
    /// Document shell: head, site header and footer around `content`.
    Base,
    /// One essay body, placed in `Base`.
    Article,
    /// Home page list of `items`, placed in `Base`.
    Index,
}

impl PageTemplate {
    fn source(self) -> &'static str {
        match self {
            Self::Base => BASE,
            Self::Article => ARTICLE,
            Self::Index => INDEX,
        }
    }

    pub fn render(self, context: &TemplateContext) -> Result<String> {
        render(self.source(), context)
    }
}

/// Fill the placeholders of `source` in one left-to-right pass. Inserted
/// values are never scanned for placeholders.
pub fn render(source: &str, context: &TemplateContext) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    let mut pieces = source.split("{{");
    out.push_str(pieces.next().unwrap_or_default());

    for piece in pieces {
        let (tag, rest) = piece
            .split_once("}}")
            .ok_or_else(|| TemplateError::Unclosed(piece.chars().take(20).collect()))?;
        let tag = tag.trim();
        let value = match tag.strip_suffix('?') {
            Some(name) => context.get(name.trim_end()).unwrap_or_default(),
            None => context
                .get(tag)
                .ok_or_else(|| TemplateError::MissingVariable(tag.to_string()))?,
        };
        out.push_str(value);
        out.push_str(rest);
    }

    Ok(out)
}

/// Document shell shared by every page.
const BASE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}{{ site_title_suffix? }}</title>
    <meta name="description" content="{{ description? }}">
    <meta name="author" content="{{ author? }}">
    <link rel="canonical" href="{{ canonical_url }}">
    <style>
        :root {
            --color-primary: #2563EB;
            --color-bg: #FFFFFF;
            --color-text: #1E293B;
            --color-text-muted: #64748B;
            --color-border: #E2E8F0;
            --color-code-bg: #F1F5F9;
        }

        @media (prefers-color-scheme: dark) {
            :root {
                --color-primary: #60A5FA;
                --color-bg: #0F172A;
                --color-text: #F1F5F9;
                --color-text-muted: #94A3B8;
                --color-border: #334155;
                --color-code-bg: #1E293B;
            }
        }

        *, *::before, *::after { box-sizing: border-box; }
        * { margin: 0; padding: 0; }

        body {
            font-family: Georgia, 'Times New Roman', serif;
            line-height: 1.7;
            color: var(--color-text);
            background-color: var(--color-bg);
            min-height: 100vh;
            display: flex;
            flex-direction: column;
        }

        .container {
            width: 100%;
            max-width: 720px;
            margin: 0 auto;
            padding: 0 1.5rem;
        }

        header { border-bottom: 1px solid var(--color-border); }
        header nav { display: flex; justify-content: space-between; padding: 1rem 0; }
        .site-title { font-weight: 600; color: var(--color-text); text-decoration: none; }

        main { flex: 1; padding: 3rem 0; }

        h1, h2, h3, h4 { line-height: 1.3; }
        h1 { font-size: 2.25rem; margin-bottom: 1.5rem; }
        h2 { font-size: 1.6rem; margin: 2.5rem 0 0.75rem; }
        h3 { font-size: 1.3rem; margin: 2rem 0 0.5rem; }
        h4 { font-size: 1.1rem; margin: 1.5rem 0 0.5rem; }

        p { margin-bottom: 1.25rem; }
        a { color: var(--color-primary); }

        code.term {
            font-family: 'JetBrains Mono', Menlo, monospace;
            font-size: 0.875em;
            background-color: var(--color-code-bg);
            padding: 0.125rem 0.375rem;
            border-radius: 0.25rem;
        }

        pre {
            font-family: 'JetBrains Mono', Menlo, monospace;
            font-size: 0.875rem;
            line-height: 1.5;
            overflow-x: auto;
            padding: 1rem 1.25rem;
            margin-bottom: 1.25rem;
            border-radius: 0.5rem;
            background-color: var(--color-code-bg);
        }

        blockquote {
            border-left: 3px solid var(--color-border);
            padding-left: 1rem;
            margin-bottom: 1.25rem;
            color: var(--color-text-muted);
        }

        .article-list { list-style: none; }
        .article-list li { margin-bottom: 2rem; }
        .article-list a { font-size: 1.25rem; font-weight: 600; }
        .article-list p { color: var(--color-text-muted); margin: 0.25rem 0 0; }

        footer {
            border-top: 1px solid var(--color-border);
            padding: 1.5rem 0;
            font-size: 0.875rem;
            color: var(--color-text-muted);
        }
    </style>
</head>
<body>
    <header>
        <div class="container">
            <nav>
                <a href="/" class="site-title">{{ site_title }}</a>
            </nav>
        </div>
    </header>
    <main>
        <div class="container">
            {{ content }}
        </div>
    </main>
    <footer>
        <div class="container">
            <p>{{ site_title }}{{ author_suffix? }}</p>
        </div>
    </footer>
</body>
</html>
"##;

const ARTICLE: &str = r#"<article class="essay">
{{ content }}
</article>"#;

const INDEX: &str = r#"<section class="index">
    <ul class="article-list">
{{ items }}
    </ul>
</section>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_required_variable() {
        let ctx = TemplateContext::new().with_var("name", "World");
        assert_eq!(render("Hello, {{ name }}!", &ctx).unwrap(), "Hello, World!");
        assert_eq!(render("{{name}}{{name}}", &ctx).unwrap(), "WorldWorld");
    }

    #[test]
    fn test_render_optional_variable() {
        let source = "Hello{{ suffix? }}!";
        assert_eq!(render(source, &TemplateContext::new()).unwrap(), "Hello!");

        let ctx = TemplateContext::new().with_var("suffix", ", World");
        assert_eq!(render(source, &ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_missing_required_variable() {
        let result = render("Hello, {{ name }}!", &TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::MissingVariable(ref name)) if name == "name"));
    }

    #[test]
    fn test_unclosed_placeholder() {
        let result = render("Hello, {{ name", &TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::Unclosed(ref at)) if at == " name"));
    }

    #[test]
    fn test_inserted_value_not_rescanned() {
        let ctx = TemplateContext::new().with_var("code", "{{ not_a_var }}");
        assert_eq!(
            render("<pre>{{ code }}</pre>", &ctx).unwrap(),
            "<pre>{{ not_a_var }}</pre>"
        );
    }

    #[test]
    fn test_text_without_placeholders_is_unchanged() {
        assert_eq!(
            render("a { b: c; } }", &TemplateContext::new()).unwrap(),
            "a { b: c; } }"
        );
    }

    #[test]
    fn test_base_template() {
        let ctx = TemplateContext::new()
            .with_var("lang", "en")
            .with_var("title", "My Page")
            .with_var("canonical_url", "https://example.com/my-page/")
            .with_var("content", "<p>Hello!</p>")
            .with_var("site_title", "My Site");

        let html = PageTemplate::Base.render(&ctx).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Page</title>"));
        assert!(html.contains("<p>Hello!</p>"));
        assert!(html.contains(r#"<a href="/" class="site-title">My Site</a>"#));
        assert!(html.contains(r#"<meta name="author" content="">"#));
    }

    #[test]
    fn test_inner_templates_need_their_slot() {
        let empty = TemplateContext::new();
        assert!(PageTemplate::Article.render(&empty).is_err());
        assert!(PageTemplate::Index.render(&empty).is_err());

        let items = TemplateContext::new().with_var("items", "<li>x</li>");
        assert!(PageTemplate::Index.render(&items).unwrap().contains("<li>x</li>"));
    }
}
