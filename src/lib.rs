// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Swapboard - Polygon Balance and Swap Quote Dashboard
//!
//! This crate renders a terminal dashboard for one wallet on Polygon PoS:
//! ERC-20 balances for a fixed set of tokens, swap quotes against DAI from
//! the 1inch aggregator and three UniswapV2-style routers, and a
//! deterministic best-venue pick per token.
//!
//! ## Modules
//!
//! - `blockchain` - Polygon RPC client, token registry, contract bindings
//! - `quotes` - venue quote adapters and best-price selection
//! - `board` - sweep engine producing generation-tagged snapshots
//! - `render` - terminal tables for balances and the quote matrix
//! - `config` - CLI flags with environment fallbacks

pub mod blockchain;
pub mod board;
pub mod config;
pub mod quotes;
pub mod render;
