//! Folio Core Library
//!
//! The typed content model shared by every article, the primitive
//! constructors authors compose pages from, plus site configuration and
//! error handling.

pub mod config;
pub mod content;
pub mod error;
pub mod primitives;

pub use config::Config;
pub use content::{Article, Block, HeadingLevel, Inline, Language, Layout, Node, Title};
pub use error::{CoreError, Result};
