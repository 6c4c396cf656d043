// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Swapboard CLI entry point: resolve configuration, run one sweep or the
//! watch loop, render to stdout.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use swapboard::blockchain::{ChainError, PolygonClient, TRACKED_TOKENS};
use swapboard::board::QuoteBoard;
use swapboard::config::{Args, Config, ConfigError};
use swapboard::quotes::{oneinch::AggregatorError, OneInchClient};
use swapboard::render;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Aggregator(#[from] AggregatorError),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    init_tracing();

    let config = Config::resolve(Args::parse())?;
    let client = PolygonClient::connect(&config.rpc_url)?;
    let aggregator = OneInchClient::new(config.aggregator_url.clone())?;

    info!(
        network = client.network().name,
        chain_id = client.network().chain_id,
        explorer = client.network().explorer_url,
        wallet = %config.wallet,
        rpc_url = %config.rpc_url,
        watch = config.watch,
        "Swapboard starting"
    );
    for token in TRACKED_TOKENS {
        debug!(
            symbol = token.symbol,
            name = token.name,
            address = token.address,
            "Tracking token"
        );
    }

    let board = QuoteBoard::new(client, aggregator, config.wallet, config.quote_timeout);

    if config.watch {
        let shutdown = CancellationToken::new();
        let signal_token = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Shutdown signal received");
                    signal_token.cancel();
                }
                Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
            }
        });

        board.run(config.interval, config.precision, shutdown).await;
    } else if let Some(snapshot) = board.refresh().await {
        print!("{}", render::render_snapshot(&snapshot, config.precision));
    }

    Ok(())
}

/// `RUST_LOG` controls the filter; `LOG_FORMAT=json` switches to structured
/// output for log shipping.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swapboard=info"));

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
