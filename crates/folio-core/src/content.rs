//! Content types and structures.
//!
//! An [`Article`] owns one [`Layout`]: a [`Title`] followed by body
//! [`Block`]s. The title is a dedicated field rather than a block variant, so
//! every document has exactly one title and it always comes first.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::CoreError;

/// Heading nesting level. Only levels 1 through 4 exist in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
}

impl HeadingLevel {
    /// Numeric level, 1-based.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// HTML tag name for this level.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            4 => Ok(Self::H4),
            other => Err(CoreError::InvalidHeadingLevel(other)),
        }
    }
}

/// Source language of a code sample. Selects presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Generic,
    Javascript,
    Haskell,
    Clojure,
}

impl Language {
    /// All catalog languages.
    pub const ALL: [Language; 4] = [
        Self::Generic,
        Self::Javascript,
        Self::Haskell,
        Self::Clojure,
    ];

    /// Stable name used in CSS classes and data attributes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Javascript => "javascript",
            Self::Haskell => "haskell",
            Self::Clojure => "clojure",
        }
    }

    /// Token understood by the syntax highlighter.
    pub fn syntax_token(self) -> &'static str {
        match self {
            Self::Generic => "txt",
            Self::Javascript => "js",
            Self::Haskell => "hs",
            Self::Clojure => "clj",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownLanguage(s.to_string()))
    }
}

/// Inline content inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    /// Plain prose.
    Text { text: String },
    /// Short inline code or term highlight.
    Term { text: String },
    /// Emphasized run.
    Emphasis { children: Vec<Inline> },
    /// Hyperlink around inline content.
    Link { href: String, children: Vec<Inline> },
}

impl Inline {
    /// Flatten to plain text.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Self::Text { text } | Self::Term { text } => out.push_str(text),
            Self::Emphasis { children } | Self::Link { children, .. } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

impl From<&str> for Inline {
    fn from(text: &str) -> Self {
        Self::Text {
            text: text.to_string(),
        }
    }
}

impl From<String> for Inline {
    fn from(text: String) -> Self {
        Self::Text { text }
    }
}

/// One unit of article body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph { children: Vec<Inline> },
    /// Preformatted code, kept verbatim.
    Code { language: Language, text: String },
    Quote { children: Vec<Block> },
}

impl Block {
    /// Flatten to plain text. Quote children are joined with blank lines.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Heading { text, .. } | Self::Code { text, .. } => text.clone(),
            Self::Paragraph { children } => children.iter().map(Inline::plain_text).collect(),
            Self::Quote { children } => children
                .iter()
                .map(Block::plain_text)
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// The article's top-level title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
}

/// A top-level node of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Title(&'a Title),
    Block(&'a Block),
}

/// The shared page wrapper: one title followed by the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub body: Vec<Block>,
}

impl Layout {
    /// Top-level nodes in document order, title first.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        std::iter::once(Node::Title(&self.title)).chain(self.body.iter().map(Node::Block))
    }

    /// Body headings with their levels, in order.
    pub fn headings(&self) -> Vec<(HeadingLevel, &str)> {
        self.body
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Plain text of the first paragraph, cut at a word boundary so it fits
    /// in `max_chars` characters (ellipsis included). A zero budget has no
    /// summary.
    pub fn summary(&self, max_chars: usize) -> Option<String> {
        if max_chars == 0 {
            return None;
        }

        let text = self.body.iter().find_map(|block| match block {
            Block::Paragraph { .. } => {
                let text = block.plain_text();
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            _ => None,
        })?;

        if text.chars().count() <= max_chars {
            return Some(text);
        }

        let budget = max_chars.saturating_sub(1);
        let cut: String = text.chars().take(budget).collect();
        let cut = match cut.rfind(char::is_whitespace) {
            Some(pos) if pos > 0 => &cut[..pos],
            _ => cut.as_str(),
        };
        Some(format!("{}…", cut.trim_end_matches([',', '.', ';', ':', ' '])))
    }
}

/// One published essay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// URL slug, e.g. `side-effects-complect`.
    pub slug: String,
    pub layout: Layout,
}

impl Article {
    pub fn new(slug: impl Into<String>, layout: Layout) -> Self {
        Self {
            slug: slug.into(),
            layout,
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Site-relative URL of the article.
    pub fn url_path(&self) -> String {
        format!("/{}/", self.slug)
    }
}
