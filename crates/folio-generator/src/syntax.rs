//! Syntax highlighting for code samples.

use folio_core::Language;
use syntect::{highlighting::ThemeSet, html::highlighted_html_for_string, parsing::SyntaxSet};
use thiserror::Error;

/// Syntax highlighting errors.
#[derive(Debug, Error)]
pub enum SyntaxError {
    /// No syntax definition for the language token.
    #[error("no syntax definition for {0}")]
    UnknownSyntax(&'static str),

    /// Configured theme is not bundled.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Failed to highlight code.
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
}

/// Syntax highlighter using syntect.
#[derive(Debug)]
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme: String,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with the specified theme.
    pub fn new(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme: theme.to_string(),
        }
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        self.theme_set.themes.contains_key(theme)
    }

    /// Highlight code for the given language.
    ///
    /// The returned HTML is a `<pre>` with inline styles whose text content is
    /// the input unchanged.
    pub fn highlight(&self, code: &str, language: Language) -> Result<String, SyntaxError> {
        let token = language.syntax_token();
        let syntax = self
            .syntax_set
            .find_syntax_by_token(token)
            .ok_or(SyntaxError::UnknownSyntax(token))?;

        let theme = self
            .theme_set
            .themes
            .get(&self.theme)
            .ok_or_else(|| SyntaxError::UnknownTheme(self.theme.clone()))?;

        Ok(highlighted_html_for_string(
            code,
            &self.syntax_set,
            syntax,
            theme,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_javascript() {
        let highlighter = SyntaxHighlighter::new("base16-ocean.dark");
        let html = highlighter
            .highlight("const f = (x) => x * 2;", Language::Javascript)
            .unwrap();

        assert!(html.starts_with("<pre"));
        assert!(html.contains("const"));
    }

    #[test]
    fn test_highlight_every_language() {
        let highlighter = SyntaxHighlighter::new("base16-ocean.dark");
        for language in Language::ALL {
            let html = highlighter.highlight("plain words", language);
            assert!(html.is_ok(), "{language} should highlight");
        }
    }

    #[test]
    fn test_unknown_theme() {
        let highlighter = SyntaxHighlighter::new("no-such-theme");
        let result = highlighter.highlight("x", Language::Generic);
        assert!(matches!(result, Err(SyntaxError::UnknownTheme(_))));
    }

    #[test]
    fn test_bundled_themes() {
        let highlighter = SyntaxHighlighter::new("base16-ocean.dark");

        assert!(highlighter.has_theme("base16-ocean.dark"));
        assert!(highlighter.has_theme("InspiredGitHub"));
        assert!(!highlighter.has_theme("no-such-theme"));
    }
}
