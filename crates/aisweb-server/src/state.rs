//! Shared application state.

use std::sync::Arc;

use aisweb_content::ContentSource;
use aisweb_core::{DisplayOptions, EventStateResolver};

use crate::config::SiteConfig;

/// State shared by every request handler.
///
/// Everything is immutable after startup; content is re-read per request by
/// the source itself.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub content: Arc<dyn ContentSource>,
    pub resolver: Arc<EventStateResolver>,
    pub display: Arc<DisplayOptions>,
}

impl AppState {
    /// Builds state from a config and a content source.
    pub fn new(config: SiteConfig, content: Arc<dyn ContentSource>) -> Self {
        let resolver = config.resolver();
        let display = config.display_options();
        Self {
            config: Arc::new(config),
            content,
            resolver: Arc::new(resolver),
            display: Arc::new(display),
        }
    }

    /// Returns the site name used in page titles.
    pub fn site_name(&self) -> &str {
        &self.config.site.name
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("content", &self.content.name())
            .finish_non_exhaustive()
    }
}
