//! aisweb server entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use aisweb_content::DirectoryContentSource;
use aisweb_core::tracing::init_tracing;
use aisweb_server::cli::Cli;
use aisweb_server::{AppState, ServerResult, SiteConfig, serve};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.tracing_config()) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "aisweb failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ServerResult<()> {
    let config = cli.apply(SiteConfig::load(cli.config.as_deref())?);
    let content = DirectoryContentSource::open(&config.content.dir)?;
    serve(AppState::new(config, Arc::new(content))).await
}
