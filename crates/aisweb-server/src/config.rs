//! Site configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/aisweb/config.toml` by default:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8080"
//!
//! [content]
//! dir = "/srv/aisweb/content"
//!
//! [site]
//! name = "AIS"
//! url = "https://example.org"
//! timezone = "America/Chicago"
//! timezone_label = "CST"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use aisweb_core::format::{DEFAULT_TIMEZONE, DEFAULT_TIMEZONE_LABEL};
use aisweb_core::resolver::DEFAULT_MAP_BASE_URL;
use aisweb_core::{DisplayOptions, EventStateResolver};

use crate::error::{ServerError, ServerResult};

/// Address the server listens on when none is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Configuration for the aisweb server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener settings.
    pub server: ServerSettings,

    /// Where content is read from.
    pub content: ContentSettings,

    /// Branding and display settings.
    pub site: SiteSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `127.0.0.1:3000`.
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Content settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Content root holding `events/`, `officers.json` and `projects.json`.
    pub dir: PathBuf,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
        }
    }
}

/// Branding and display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Short name appended to page titles.
    pub name: String,

    /// Public base URL, used to build share links.
    pub url: String,

    /// Campus map URL the room number is appended to.
    pub map_base_url: String,

    /// Timezone event times are shown in.
    pub timezone: Tz,

    /// Label printed after event times.
    pub timezone_label: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "AIS".to_string(),
            url: format!("http://{DEFAULT_BIND}"),
            map_base_url: DEFAULT_MAP_BASE_URL.to_string(),
            timezone: DEFAULT_TIMEZONE,
            timezone_label: DEFAULT_TIMEZONE_LABEL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the default path is used
    /// if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> ServerResult<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| ServerError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> ServerResult<Self> {
        toml::from_str(content)
            .map_err(|e| ServerError::config(format!("failed to parse config: {}", e)))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("aisweb")
    }

    /// Builder: set the bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.server.bind = bind.into();
        self
    }

    /// Builder: set the content directory.
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content.dir = dir.into();
        self
    }

    /// Builder: set the public site URL.
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site.url = url.into();
        self
    }

    /// Parses the bind address.
    pub fn bind_addr(&self) -> ServerResult<SocketAddr> {
        self.server.bind.parse().map_err(|e| {
            ServerError::config(format!("invalid bind address {:?}: {}", self.server.bind, e))
        })
    }

    /// Returns how event times should be displayed.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            timezone: self.site.timezone,
            timezone_label: self.site.timezone_label.clone(),
        }
    }

    /// Builds the event state resolver for this site.
    pub fn resolver(&self) -> EventStateResolver {
        EventStateResolver::new(&self.site.map_base_url)
    }

    /// Returns the public URL of an event page.
    pub fn event_url(&self, id: &str) -> String {
        format!("{}/events/{}", self.site.url.trim_end_matches('/'), id)
    }
}
