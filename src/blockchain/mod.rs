// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Blockchain integration module for Polygon PoS.
//!
//! This module provides functionality for:
//! - Querying ERC-20 token balances for the tracked tokens
//! - Read-only `getAmountsOut` quotes against UniswapV2-style routers

pub mod client;
pub mod erc20;
pub mod router;
pub mod types;

pub use client::{parse_address, ChainError, HttpProvider, PolygonClient};
pub use types::*;
