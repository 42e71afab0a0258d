//! HTTP site: pages, routes, configuration.
//!
//! This crate serves the AIS club website:
//! - Homepage summary, officer roster and projects placeholder
//! - Event listing and event detail pages with phase-dependent buttons
//! - TOML configuration and a `/healthz` endpoint
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use aisweb_content::DirectoryContentSource;
//! use aisweb_server::{AppState, SiteConfig, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SiteConfig::default().with_content_dir("./content");
//!     let content = DirectoryContentSource::open(&config.content.dir)?;
//!     serve(AppState::new(config, Arc::new(content))).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
mod config;
mod error;
pub mod pages;
pub mod render;
mod routes;
mod shutdown;
mod state;

use tokio::net::TcpListener;
use tracing::info;

pub use config::{ContentSettings, DEFAULT_BIND, ServerSettings, SiteConfig, SiteSettings};
pub use error::{ServerError, ServerResult};
pub use routes::router;
pub use shutdown::shutdown_signal;
pub use state::AppState;

/// Binds the configured address and serves the site until a shutdown signal.
pub async fn serve(state: AppState) -> ServerResult<()> {
    let addr = state.config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::bind(addr.to_string(), e))?;

    info!(
        %addr,
        content_source = state.content.name(),
        "aisweb listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}
