//! Check command - validate configuration and the article catalog

use std::{collections::HashSet, path::Path};

use color_eyre::eyre::{Result, bail};
use folio_core::{Article, Block, HeadingLevel, Inline, config::Config};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration file (when present) and every catalog article.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and articles");

    println!("Checking configuration...");
    let mut result = match Config::load_or_default(config_path) {
        Ok(_) => {
            println!("  ✓ Configuration valid");
            ValidationResult::default()
        }
        Err(e) => {
            println!("  ✗ Configuration invalid: {e}");
            let mut result = ValidationResult::default();
            result.add_error(format!("Configuration error: {e}"));
            result
        }
    };

    let articles = folio_articles::catalog();
    println!("\nChecking {} article(s)...", articles.len());
    let content = validate(&articles);
    result.errors.extend(content.errors);
    result.warnings.extend(content.warnings);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Run the authoring checks over a set of articles.
pub fn validate(articles: &[Article]) -> ValidationResult {
    let mut result = ValidationResult::default();
    let mut seen = HashSet::new();

    for article in articles {
        let slug = &article.slug;

        if !seen.insert(slug.as_str()) {
            result.add_error(format!("Duplicate slug: {slug}"));
        }
        if !is_valid_slug(slug) {
            result.add_error(format!(
                "Malformed slug {slug:?}: use lowercase letters, digits and '-'"
            ));
        }
        if article.title().trim().is_empty() {
            result.add_error(format!("{slug}: title is empty"));
        }

        let mut previous = HeadingLevel::H1;
        check_blocks(slug, &article.layout.body, &mut previous, &mut result);
    }

    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated catalog"
    );
    result
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn check_blocks(
    slug: &str,
    blocks: &[Block],
    previous: &mut HeadingLevel,
    result: &mut ValidationResult,
) {
    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                if level.as_u8() > previous.as_u8() + 1 {
                    result.add_warning(format!(
                        "{slug}: heading {text:?} jumps from h{} to h{}",
                        previous.as_u8(),
                        level.as_u8()
                    ));
                }
                *previous = *level;
            }
            Block::Paragraph { children } => {
                if block.plain_text().trim().is_empty() {
                    result.add_warning(format!("{slug}: empty paragraph"));
                }
                check_inlines(slug, children, result);
            }
            Block::Code { language, text } => {
                if text.trim().is_empty() {
                    result.add_warning(format!("{slug}: empty {language} code sample"));
                }
            }
            Block::Quote { children } => check_blocks(slug, children, previous, result),
        }
    }
}

fn check_inlines(slug: &str, inlines: &[Inline], result: &mut ValidationResult) {
    for inline in inlines {
        match inline {
            Inline::Link { href, children } => {
                if href.trim().is_empty() {
                    result.add_warning(format!(
                        "{slug}: link {:?} has an empty href",
                        inline.plain_text()
                    ));
                }
                check_inlines(slug, children, result);
            }
            Inline::Emphasis { children } => check_inlines(slug, children, result),
            Inline::Text { .. } | Inline::Term { .. } => {}
        }
    }
}
