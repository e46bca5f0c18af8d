//! Folio CLI Library
//!
//! Command implementations used by the `folio` binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check, list, show, serve)
//! - [`server`] - Static file server for local preview
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio::cmd;
//!
//! // Build the site into ./public
//! cmd::build::run(Path::new("folio.toml"), Some(Path::new("public")), None, false).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use folio_core::{Article, Config};
pub use folio_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
