//! Logging setup shared by the aisweb binaries.
//!
//! ```ignore
//! use aisweb_core::tracing::{init_tracing, TracingConfig};
//!
//! // Pretty output at INFO, `RUST_LOG` honored
//! init_tracing(TracingConfig::default())?;
//!
//! // JSON lines with request spans, for a deployed site
//! init_tracing(TracingConfig::server())?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    prelude::*,
    util::TryInitError,
};

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),

    /// The filter directive did not parse
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// Multi-line, human-readable
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// JSON lines for log shippers
    Json,
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level used when neither `env_filter` nor `RUST_LOG` is set
    pub default_level: Level,
    pub output_format: TracingOutputFormat,
    /// Include file and line of each event
    pub include_location: bool,
    pub include_timestamp: bool,
    /// Log span open/close, which is how request latency shows up
    pub include_span_events: bool,
    /// Explicit filter directive; wins over `RUST_LOG`
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            output_format: TracingOutputFormat::Pretty,
            include_location: false,
            include_timestamp: true,
            include_span_events: false,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Compact DEBUG output with source locations.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            output_format: TracingOutputFormat::Compact,
            include_location: true,
            include_timestamp: false,
            ..Self::default()
        }
    }

    /// JSON output with request spans.
    #[must_use]
    pub fn server() -> Self {
        Self {
            output_format: TracingOutputFormat::Json,
            include_location: true,
            include_span_events: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Resolves the filter: explicit directive, then `RUST_LOG`, then
    /// [`default_directive`] at `default_level`.
    pub fn build_filter(&self) -> Result<EnvFilter, TracingError> {
        match &self.env_filter {
            Some(directive) => Ok(EnvFilter::try_new(directive)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(self.default_level)))),
        }
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.include_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(span_events);

        match (self.output_format, self.include_timestamp) {
            (TracingOutputFormat::Pretty, _) => layer.pretty().boxed(),
            (TracingOutputFormat::Json, _) => layer.json().boxed(),
            (TracingOutputFormat::Compact, true) => layer.compact().boxed(),
            (TracingOutputFormat::Compact, false) => layer.compact().without_time().boxed(),
        }
    }
}

/// Installs the global subscriber. Call once, at startup.
///
/// # Errors
///
/// Fails if a subscriber is already installed or the filter directive is
/// invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.build_filter()?;
    tracing_subscriber::registry()
        .with(config.fmt_layer())
        .with(filter)
        .try_init()?;
    Ok(())
}

/// Directive used when neither `RUST_LOG` nor a custom filter is set.
///
/// Covers the workspace crates and the HTTP trace layer.
pub fn default_directive(level: Level) -> String {
    format!("aisweb={level},tower_http={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let config = TracingConfig::default();
        assert_eq!(config.default_level, Level::INFO);
        assert_eq!(config.output_format, TracingOutputFormat::Pretty);
        assert!(!config.include_span_events);

        let debug = TracingConfig::debug();
        assert_eq!(debug.default_level, Level::DEBUG);
        assert_eq!(debug.output_format, TracingOutputFormat::Compact);
        assert!(!debug.include_timestamp);

        let server = TracingConfig::server();
        assert_eq!(server.output_format, TracingOutputFormat::Json);
        assert!(server.include_span_events);
        assert!(server.include_timestamp);
    }

    #[test]
    fn builder_methods() {
        let config = TracingConfig::default()
            .with_level(Level::WARN)
            .with_format(TracingOutputFormat::Json)
            .with_env_filter("aisweb_server=trace");

        assert_eq!(config.default_level, Level::WARN);
        assert_eq!(config.output_format, TracingOutputFormat::Json);
        assert_eq!(config.env_filter.as_deref(), Some("aisweb_server=trace"));
    }

    #[test]
    fn explicit_filter_must_parse() {
        let ok = TracingConfig::default().with_env_filter("aisweb=debug");
        assert!(ok.build_filter().is_ok());

        let bad = TracingConfig::default().with_env_filter("aisweb=notalevel");
        assert!(matches!(bad.build_filter(), Err(TracingError::EnvFilter(_))));
    }

    #[test]
    fn directive_covers_workspace_and_http() {
        assert_eq!(
            default_directive(Level::DEBUG),
            "aisweb=DEBUG,tower_http=DEBUG"
        );
        assert!(EnvFilter::try_new(default_directive(Level::INFO)).is_ok());
    }
}
