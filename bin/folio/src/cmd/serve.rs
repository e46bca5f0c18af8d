//! Serve command - builds the site and serves it for local preview

use std::{net::SocketAddr, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use crate::server::{create_router, shutdown_signal};

/// Run the serve command.
///
/// Builds once, then serves the output directory until Ctrl+C.
pub async fn run(config_path: &Path, port: u16, output: Option<&Path>) -> Result<()> {
    tracing::info!(?config_path, port, ?output, "Starting preview server");

    let base_url = format!("http://localhost:{port}");
    super::build::run(config_path, output, Some(&base_url), false)?;

    let config = folio_core::Config::load_or_default(config_path)
        .wrap_err("Failed to load configuration")?;
    let (_, output_dir) = super::build::apply_overrides(config, output, None, false);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!("  Serving {} at http://{addr}", output_dir.display());
    println!("  Press Ctrl+C to stop");

    axum::serve(listener, create_router(&output_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("Server error")?;

    Ok(())
}
