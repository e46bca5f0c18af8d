//! Constructors articles are composed from.
//!
//! Every function here is pure and total. Anything outside the catalog (a
//! fifth heading level, an unlisted language) cannot be expressed, so there is
//! nothing to validate at this layer.
//!
//! ```
//! use folio_core::{HeadingLevel, Language, primitives::*};
//!
//! let doc = layout(
//!     title("Side Effects"),
//!     [
//!         heading(HeadingLevel::H2, "Functions"),
//!         paragraph(["A function maps ", "inputs to outputs."]),
//!         code(Language::Javascript, "const f = (x) => x * 2;"),
//!     ],
//! );
//! assert_eq!(doc.body.len(), 3);
//! ```

use crate::content::{Block, HeadingLevel, Inline, Language, Layout, Title};

/// Article title. Placed first by [`layout`].
pub fn title(text: impl Into<String>) -> Title {
    Title { text: text.into() }
}

pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Block {
    Block::Heading {
        level,
        text: text.into(),
    }
}

/// A paragraph of inline content. Plain strings become [`Inline::Text`].
pub fn paragraph<I, T>(children: I) -> Block
where
    I: IntoIterator<Item = T>,
    T: Into<Inline>,
{
    Block::Paragraph {
        children: children.into_iter().map(Into::into).collect(),
    }
}

pub fn text(text: impl Into<String>) -> Inline {
    Inline::Text { text: text.into() }
}

/// Inline code or term highlight.
pub fn term(text: impl Into<String>) -> Inline {
    Inline::Term { text: text.into() }
}

pub fn emphasis<I, T>(children: I) -> Inline
where
    I: IntoIterator<Item = T>,
    T: Into<Inline>,
{
    Inline::Emphasis {
        children: children.into_iter().map(Into::into).collect(),
    }
}

pub fn link<I, T>(href: impl Into<String>, children: I) -> Inline
where
    I: IntoIterator<Item = T>,
    T: Into<Inline>,
{
    Inline::Link {
        href: href.into(),
        children: children.into_iter().map(Into::into).collect(),
    }
}

/// Preformatted code sample. The text is stored exactly as given.
pub fn code(language: Language, text: impl Into<String>) -> Block {
    Block::Code {
        language,
        text: text.into(),
    }
}

pub fn quote(children: impl IntoIterator<Item = Block>) -> Block {
    Block::Quote {
        children: children.into_iter().collect(),
    }
}

/// Wrap a title and body in the shared page layout.
pub fn layout(title: Title, body: impl IntoIterator<Item = Block>) -> Layout {
    Layout {
        title,
        body: body.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_mixed_children() {
        let block = paragraph([text("a "), term(":tag"), emphasis(["pure"]), "b".into()]);

        let Block::Paragraph { children } = block else {
            panic!("expected paragraph");
        };
        assert_eq!(children.len(), 4);
        assert_eq!(children[1], Inline::Term { text: ":tag".into() });
        assert_eq!(
            children[2],
            Inline::Emphasis {
                children: vec![Inline::Text { text: "pure".into() }]
            }
        );
        assert_eq!(children[3], Inline::Text { text: "b".into() });
    }

    #[test]
    fn test_code_keeps_text_verbatim() {
        let source = "\n  f(x) = 2x\n\tconst f = (x) => x * 2; \n";
        for language in Language::ALL {
            let Block::Code { text, .. } = code(language, source) else {
                panic!("expected code");
            };
            assert_eq!(text, source);
        }
    }

    #[test]
    fn test_code_accepts_invalid_source() {
        let Block::Code { text, language } = code(Language::Haskell, "f :: -> )(") else {
            panic!("expected code");
        };
        assert_eq!(language, Language::Haskell);
        assert_eq!(text, "f :: -> )(");
    }

    #[test]
    fn test_quote_preserves_order() {
        let block = quote([paragraph(["first"]), paragraph(["second"])]);
        let Block::Quote { children } = block else {
            panic!("expected quote");
        };
        assert_eq!(children[0].plain_text(), "first");
        assert_eq!(children[1].plain_text(), "second");
    }

    #[test]
    fn test_layout_keeps_body_order() {
        let doc = layout(
            title("X"),
            [heading(HeadingLevel::H2, "Y"), paragraph(["hello"])],
        );

        assert_eq!(doc.title.text, "X");
        assert_eq!(
            doc.body,
            vec![
                Block::Heading {
                    level: HeadingLevel::H2,
                    text: "Y".into()
                },
                Block::Paragraph {
                    children: vec![Inline::Text {
                        text: "hello".into()
                    }]
                },
            ]
        );
    }

    #[test]
    fn test_link() {
        let inline = link("https://github.com/noprompt/meander/", ["Meander"]);
        assert_eq!(
            inline,
            Inline::Link {
                href: "https://github.com/noprompt/meander/".into(),
                children: vec![Inline::Text {
                    text: "Meander".into()
                }],
            }
        );
    }
}
