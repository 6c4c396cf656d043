// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! # Quote Board Engine
//!
//! One sweep reads the chain head, the wallet's tracked balances and all
//! sixteen (token, venue) quotes, then publishes a [`BoardSnapshot`].
//!
//! ## Strategy
//!
//! Every sweep:
//! 1. Takes the next generation number; the sweep's output carries it.
//! 2. Reads the block number and the balance snapshot (concurrently).
//! 3. Resolves all venue quotes, venues joined per token and tokens joined
//!    across, each venue call bounded by `quote_timeout`.
//! 4. Publishes only if no newer sweep has started in the meantime; a
//!    superseded sweep is discarded, so stale quotes never overwrite fresh
//!    ones.
//!
//! ## Shutdown
//!
//! Watch mode uses `tokio_util::sync::CancellationToken` for graceful
//! shutdown.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::blockchain::{
    parse_address, Erc20Token, PolygonClient, TokenBalance, DAI_TOKEN, TRACKED_TOKENS,
};
use crate::quotes::{best_quote, BestQuote, OneInchClient, Quote, QuoteSet, Venue, ROUTER_VENUES};

/// One dashboard row: a tracked token with its balance and quotes.
#[derive(Debug, Clone)]
pub struct TokenRow {
    pub token: &'static Erc20Token,
    /// `None` when the balance read failed this sweep.
    pub balance: Option<TokenBalance>,
    pub quotes: QuoteSet,
    pub best: BestQuote,
}

/// The published result of one complete sweep.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub generation: u64,
    pub taken_at: DateTime<Utc>,
    /// `None` when the head read failed; the rest of the sweep still runs.
    pub block_number: Option<u64>,
    pub rows: Vec<TokenRow>,
}

/// Sweep engine over one wallet's tracked tokens.
pub struct QuoteBoard {
    client: PolygonClient,
    aggregator: OneInchClient,
    wallet: Address,
    quote_timeout: Duration,
    generation: AtomicU64,
}

impl QuoteBoard {
    pub fn new(
        client: PolygonClient,
        aggregator: OneInchClient,
        wallet: Address,
        quote_timeout: Duration,
    ) -> Self {
        Self {
            client,
            aggregator,
            wallet,
            quote_timeout,
            generation: AtomicU64::new(0),
        }
    }

    /// Run one sweep.
    ///
    /// Returns `None` when a newer sweep started while this one was in
    /// flight; the stale result is dropped unpublished.
    pub async fn refresh(&self) -> Option<BoardSnapshot> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let started = Instant::now();

        let (block_number, balances) = tokio::join!(
            self.client.block_number(),
            self.client.wallet_balances(self.wallet, &TRACKED_TOKENS),
        );
        let block_number = match block_number {
            Ok(number) => Some(number),
            Err(e) => {
                warn!(error = %e, "Failed to read block number");
                None
            }
        };

        let rows = join_all(
            TRACKED_TOKENS
                .into_iter()
                .zip(balances)
                .map(|(token, balance)| self.token_row(token, balance)),
        )
        .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            warn!(generation, "Discarding superseded sweep");
            return None;
        }

        info!(
            generation,
            block = ?block_number,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Sweep complete"
        );

        Some(BoardSnapshot {
            generation,
            taken_at: Utc::now(),
            block_number,
            rows,
        })
    }

    /// Run sweeps until the cancellation token is triggered, rendering each
    /// published snapshot to stdout.
    pub async fn run(&self, interval: Duration, precision: u32, shutdown: CancellationToken) {
        info!(
            interval_secs = interval.as_secs(),
            wallet = %self.wallet,
            "Quote board watch starting"
        );

        loop {
            if shutdown.is_cancelled() {
                info!("Quote board watch shutting down");
                return;
            }

            if let Some(snapshot) = self.refresh().await {
                print!("{}", crate::render::render_snapshot(&snapshot, precision));
            }

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.cancelled() => {
                    info!("Quote board watch shutting down");
                    return;
                }
            }
        }
    }

    async fn token_row(&self, token: &'static Erc20Token, balance: Option<TokenBalance>) -> TokenRow {
        let amount = balance.as_ref().map(|b| b.raw);
        let quotes = self.token_quotes(token, amount).await;
        let best = best_quote(&quotes);
        debug!(token = token.symbol, best = ?best.venue, "Token quotes resolved");

        TokenRow {
            token,
            balance,
            quotes,
            best,
        }
    }

    /// Resolve one token's quotes against DAI on every venue concurrently.
    pub(crate) async fn token_quotes(
        &self,
        token: &'static Erc20Token,
        amount: Option<U256>,
    ) -> QuoteSet {
        let (Ok(from), Ok(to)) = (parse_address(token.address), parse_address(DAI_TOKEN.address))
        else {
            warn!(token = token.symbol, "Registry address failed to parse");
            return QuoteSet::unavailable();
        };

        let (oneinch, router_quotes) = tokio::join!(
            self.venue_call(Venue::OneInch, self.aggregator.quote(amount, from, to)),
            join_all(ROUTER_VENUES.into_iter().map(|venue| async move {
                let quote = self
                    .venue_call(venue.venue, venue.quote(&self.client, amount, from, to))
                    .await;
                (venue.venue, quote)
            })),
        );

        let mut quotes = QuoteSet::unavailable();
        quotes.set(Venue::OneInch, oneinch);
        for (venue, quote) in router_quotes {
            quotes.set(venue, quote);
        }
        quotes
    }

    /// Bound one venue call by the configured timeout; a venue that hangs
    /// costs one cell, not the sweep.
    async fn venue_call<F>(&self, venue: Venue, call: F) -> Quote
    where
        F: Future<Output = Quote>,
    {
        match tokio::time::timeout(self.quote_timeout, call).await {
            Ok(quote) => quote,
            Err(_) => {
                warn!(
                    venue = %venue,
                    timeout_secs = self.quote_timeout.as_secs(),
                    "Venue quote timed out"
                );
                Quote::unavailable()
            }
        }
    }
}
