//! Folio Articles
//!
//! Every published essay lives in its own module as a zero-argument function
//! composing [`folio_core::primitives`]. Adding an article means adding a
//! module and listing it in [`catalog`].

pub mod basic_functional_studies;
pub mod building_meander_in_meander;
pub mod conceptual_engineering;
pub mod side_effects_complect;

use folio_core::Article;

/// All published articles, newest first.
pub fn catalog() -> Vec<Article> {
    vec![
        building_meander_in_meander::article(),
        conceptual_engineering::article(),
        basic_functional_studies::article(),
        side_effects_complect::article(),
    ]
}

/// Look up a single article by slug.
pub fn find(slug: &str) -> Option<Article> {
    catalog().into_iter().find(|article| article.slug == slug)
}
