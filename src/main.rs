//! Crawlgate main entry point
//!
//! Command-line interface for the Crawlgate robots.txt and sitemap edge
//! service.

use anyhow::Context;
use clap::Parser;
use crawlgate::config::load_config_with_hash;
use crawlgate::remote::ContentClient;
use crawlgate::server::{app, AppState};
use crawlgate::site::SiteResolver;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Crawlgate: a multi-site robots.txt and sitemap edge service
///
/// Crawlgate serves per-site crawler-policy documents and paginated XML
/// sitemaps, sourcing both from a remote content service at request time.
#[derive(Parser, Debug)]
#[command(name = "crawlgate")]
#[command(version)]
#[command(about = "Multi-site robots.txt and sitemap edge service", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the site table without serving
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.check {
        handle_check(&config);
        return Ok(());
    }

    serve(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawlgate=info,warn"),
            1 => EnvFilter::new("crawlgate=debug,info"),
            2 => EnvFilter::new("crawlgate=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --check mode: validates config and shows the site table
fn handle_check(config: &crawlgate::Config) {
    println!("=== Crawlgate Configuration Check ===\n");

    println!("Server:");
    println!("  Listen: {}:{}", config.server.host, config.server.port);

    println!("\nRemote content service:");
    println!("  Endpoint: {}", config.remote.endpoint);
    println!("  Timeout: {}s", config.remote.timeout_seconds);
    println!("  User agent: {}", config.remote.user_agent);

    println!("\nSites ({}):", config.sites.len());
    for entry in &config.sites {
        println!("  - {}", entry.name);
        for hostname in &entry.hostnames {
            println!("    * {}", hostname);
        }
    }
    println!("\nDefault site: {}", config.default_site);

    println!("\n✓ Configuration is valid");
}

/// Binds the listener and serves the document routes
async fn serve(config: crawlgate::Config) -> anyhow::Result<()> {
    let resolver = Arc::new(SiteResolver::from_config(&config));
    let client = Arc::new(ContentClient::new(&config.remote)?);

    let state = AppState { resolver, client };
    let router = app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
