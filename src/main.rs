//! Pokédex - an interactive explorer for PokeAPI
//!
//! Reads commands from stdin, prints results to stdout, and logs to stderr.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{Config, ExpiringCache, PokeApiClient, Repl};

/// Main entry point for the Pokédex.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from the environment, then apply the flags
/// 4. Create the response cache, which starts its sweep task
/// 5. Run the REPL on stdin/stdout until `exit` or end of input
/// 6. Stop the sweep task before returning
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with REPL output.
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = cli
        .resolve(Config::from_env())
        .context("invalid configuration")?;
    info!(
        cache_interval = ?config.cache_interval,
        base_url = %config.base_url,
        catch_delay = ?config.catch_delay,
        "configuration loaded"
    );

    let cache = Arc::new(
        ExpiringCache::new(config.cache_interval).context("failed to create response cache")?,
    );
    let client = PokeApiClient::new(config.base_url.clone(), Arc::clone(&cache));
    let mut repl = Repl::new(client, config.catch_delay, rand::rng());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = repl.run(stdin.lock(), &mut stdout).await;

    // The REPL's client holds the other reference to the cache
    drop(repl);
    match Arc::try_unwrap(cache) {
        Ok(cache) => cache.shutdown().await,
        Err(_) => warn!("response cache still shared at exit; sweep task left to drop"),
    }

    outcome.context("failed to read input")?;
    info!("session ended");
    Ok(())
}
