// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! # Runtime Configuration
//!
//! CLI flags take precedence; unset flags fall back to `SWAPBOARD_*`
//! environment variables, then to the defaults below. Configuration is
//! resolved once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SWAPBOARD_WALLET` | Wallet address to track | Required (or `--wallet`) |
//! | `SWAPBOARD_RPC_URL` | Polygon JSON-RPC endpoint | `https://polygon-rpc.com` |
//! | `SWAPBOARD_AGGREGATOR_URL` | 1inch quote API base URL | `https://api.1inch.io/v4.0/137` |
//! | `SWAPBOARD_QUOTE_TIMEOUT_SECS` | Upper bound on a single venue quote | `10` |
//! | `SWAPBOARD_PRECISION` | Significant figures for rendered quotes | `6` |
//! | `SWAPBOARD_INTERVAL_SECS` | Watch-mode sweep interval | `30` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `swapboard=info` |

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use alloy::primitives::Address;
use clap::Parser;

use crate::blockchain::{parse_address, POLYGON_MAINNET};

pub const DEFAULT_RPC_URL: &str = POLYGON_MAINNET.rpc_url;
pub const DEFAULT_AGGREGATOR_URL: &str = "https://api.1inch.io/v4.0/137";
const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PRECISION: u32 = 6;
const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Parsed command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Wallet address whose balances are tracked.
    #[clap(long)]
    pub wallet: Option<String>,

    /// Polygon JSON-RPC endpoint.
    #[clap(long)]
    pub rpc_url: Option<String>,

    /// Base URL of the 1inch quote API.
    #[clap(long)]
    pub aggregator_url: Option<String>,

    /// Upper bound on a single venue quote, in seconds.
    #[clap(long)]
    pub quote_timeout_secs: Option<u64>,

    /// Significant figures used when rendering quotes.
    #[clap(long)]
    pub precision: Option<u32>,

    /// Keep sweeping at a fixed interval instead of exiting after one board.
    #[clap(long)]
    pub watch: bool,

    /// Seconds between sweeps in watch mode.
    #[clap(long)]
    pub interval_secs: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration missing: {0}")]
    Missing(String),

    #[error("configuration invalid: {0}")]
    Invalid(String),
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub wallet: Address,
    pub rpc_url: String,
    pub aggregator_url: String,
    pub quote_timeout: Duration,
    pub precision: u32,
    pub watch: bool,
    pub interval: Duration,
}

impl Config {
    pub fn resolve(args: Args) -> Result<Self, ConfigError> {
        let wallet_raw = args
            .wallet
            .or_else(|| env_optional("SWAPBOARD_WALLET"))
            .ok_or_else(|| {
                ConfigError::Missing("wallet address (--wallet or SWAPBOARD_WALLET)".to_string())
            })?;
        let wallet = parse_address(&wallet_raw)
            .map_err(|e| ConfigError::Invalid(format!("wallet address: {e}")))?;

        let rpc_url = args
            .rpc_url
            .unwrap_or_else(|| env_or_default("SWAPBOARD_RPC_URL", DEFAULT_RPC_URL));
        let aggregator_url = args
            .aggregator_url
            .unwrap_or_else(|| env_or_default("SWAPBOARD_AGGREGATOR_URL", DEFAULT_AGGREGATOR_URL));

        let quote_timeout_secs = match args.quote_timeout_secs {
            Some(secs) => secs,
            None => env_parsed("SWAPBOARD_QUOTE_TIMEOUT_SECS", DEFAULT_QUOTE_TIMEOUT_SECS)?,
        };
        if quote_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "quote timeout must be at least 1 second".to_string(),
            ));
        }

        let precision = match args.precision {
            Some(precision) => precision,
            None => env_parsed("SWAPBOARD_PRECISION", DEFAULT_PRECISION)?,
        };
        if precision == 0 {
            return Err(ConfigError::Invalid(
                "precision must be at least 1 significant figure".to_string(),
            ));
        }

        let interval_secs = match args.interval_secs {
            Some(secs) => secs,
            None => env_parsed("SWAPBOARD_INTERVAL_SECS", DEFAULT_INTERVAL_SECS)?,
        };
        if interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "sweep interval must be at least 1 second".to_string(),
            ));
        }

        Ok(Self {
            wallet,
            rpc_url,
            aggregator_url,
            quote_timeout: Duration::from_secs(quote_timeout_secs),
            precision,
            watch: args.watch,
            interval: Duration::from_secs(interval_secs),
        })
    }
}

fn env_optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}

fn env_parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env_optional(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{name}: {e}"))),
        None => Ok(default),
    }
}
