//! List command - prints the published catalog

use color_eyre::eyre::Result;
use folio_core::Article;
use folio_generator::html::SUMMARY_CHARS;

/// Run the list command.
pub fn run() -> Result<()> {
    let articles = folio_articles::catalog();
    tracing::info!(count = articles.len(), "Listing articles");

    for article in &articles {
        println!("{}", format_entry(article));
    }

    Ok(())
}

/// Format one catalog entry: slug and title, then an indented summary line.
fn format_entry(article: &Article) -> String {
    let mut entry = format!("{}  {}", article.slug, article.title());
    if let Some(summary) = article.layout.summary(SUMMARY_CHARS) {
        entry.push_str("\n    ");
        entry.push_str(&summary);
    }
    entry
}
