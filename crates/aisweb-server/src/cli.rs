//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use aisweb_core::tracing::{TracingConfig, TracingOutputFormat, default_directive};

use crate::config::SiteConfig;

/// aisweb - The AIS club website
#[derive(Debug, Parser)]
#[command(name = "aisweb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "AISWEB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on (overrides config)
    #[arg(long, env = "AISWEB_BIND")]
    pub bind: Option<String>,

    /// Content directory (overrides config)
    #[arg(long, env = "AISWEB_CONTENT_DIR")]
    pub content_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormat> for TracingOutputFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
            LogFormat::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Returns the tracing configuration for these flags.
    ///
    /// `--log-format json` selects the deployed-server preset, with request
    /// spans. `--debug` raises the level on top of whichever preset applies.
    pub fn tracing_config(&self) -> TracingConfig {
        let config = match (self.log_format, self.debug) {
            (Some(LogFormat::Json), _) => TracingConfig::server(),
            (Some(format), _) => TracingConfig::default().with_format(format.into()),
            (None, true) => TracingConfig::debug(),
            (None, false) => TracingConfig::default(),
        };
        if self.debug {
            config
                .with_level(Level::DEBUG)
                .with_env_filter(default_directive(Level::DEBUG))
        } else {
            config
        }
    }

    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, mut config: SiteConfig) -> SiteConfig {
        if let Some(bind) = &self.bind {
            config = config.with_bind(bind);
        }
        if let Some(dir) = &self.content_dir {
            config = config.with_content_dir(dir);
        }
        config
    }
}
