//! Folio Generator Library
//!
//! Turns assembled articles into a static site.
//!
//! # Modules
//!
//! - [`render`] - Serializers from the content model to HTML or JSON
//! - [`syntax`] - Syntax highlighting for code samples
//! - [`template`] - Page chrome with variable interpolation
//! - [`html`] - Full HTML documents for articles and the index
//! - [`sitemap`] - XML sitemap generation
//! - [`build`] - Build orchestration

pub mod build;
pub mod html;
pub mod render;
pub mod sitemap;
pub mod syntax;
pub mod template;

pub use build::{BuildError, BuildStats, Builder};
pub use html::HtmlGenerator;
pub use render::{HtmlRenderer, JsonRenderer, Render, RenderError};
pub use sitemap::SitemapGenerator;
pub use syntax::SyntaxHighlighter;
pub use template::{PageTemplate, TemplateContext};
