use anyhow::Context;
use clap::Parser;

use parma_api::{CatalogClient, Flavor};
use parma_config::ParmaConfig;
use parma_core::Lang;

mod cli;
mod commands;
mod progress;
mod render;
mod view;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("parma error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = ParmaConfig::load_with_dotenv().context("failed to load configuration")?;
    let flavor = Flavor::parse(&config.backend.flavor)
        .context("unrecognized backend.flavor in configuration")?;
    tracing::debug!(url = %config.backend.url, flavor = ?flavor, "backend configured");
    let client = CatalogClient::new(&config.backend.url, flavor);

    let lang = match cli.lang.as_deref() {
        Some("en") => Lang::En,
        Some(_) => Lang::Ru,
        None => config.general.lang,
    };

    let app = commands::App {
        client,
        lang,
        page_size: config.general.page_size,
        featured_limit: config.general.featured_limit,
        json: cli.json,
        show_spinner: !cli.quiet && !cli.json,
    };

    commands::dispatch(cli.command, &app).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PARMA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
