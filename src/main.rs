//! sccp CLI entrypoint
//! Prefixes the tags of every API in a swagger-combine config with the API's title.
#![deny(unsafe_code)]
mod application;
mod core;
mod infrastructure;

// Internal imports (std, crate)
use application::{PrefixConfigRequest, PrefixConfigUseCase};
use infrastructure::{
    config::FileConfigLoader,
    openapi::{CompositeDocumentLoader, DEFAULT_TIMEOUT, FileDocumentLoader, HttpDocumentLoader},
    output::FileSystemOutputService,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sccp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the swagger-combine config file (JSON, or YAML with a .yaml/.yml extension)
    config: PathBuf,

    /// Output file [default: combined-config<ext> in the current directory]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Timeout in seconds for each OpenAPI document request
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries the progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Usage errors exit with 1 rather than clap's default
            e.print()?;
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    info!(config = %cli.config.display(), "Starting sccp");
    let output_path = prefix_config(&cli).await.map_err(|e| {
        error!("{e:#}");
        e
    })?;
    println!("Wrote {}", output_path.display());
    Ok(())
}

async fn prefix_config(cli: &Cli) -> anyhow::Result<PathBuf> {
    let http_loader = HttpDocumentLoader::new(Duration::from_secs(cli.timeout))
        .context("Failed to create HTTP client")?;
    let document_loader =
        CompositeDocumentLoader::new(Box::new(http_loader), Box::new(FileDocumentLoader::new()));

    let use_case = PrefixConfigUseCase::new(
        Arc::new(FileConfigLoader::new()),
        Arc::new(document_loader),
        Arc::new(FileSystemOutputService::new()),
    );

    let mut request = PrefixConfigRequest::new(&cli.config);
    if let Some(output) = &cli.output {
        request = request.with_output(output);
    }

    let response = use_case
        .execute(request)
        .await
        .with_context(|| format!("Failed to prefix tags in {}", cli.config.display()))?;

    println!("Processed {} API(s)", response.apis_processed);
    Ok(response.output_path)
}
