// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! On-chain quote adapters for the UniswapV2-style router venues.
//!
//! ApeSwap, CafeSwap and QuickSwap differ only in router address and bridge
//! token, so a single adapter parameterized by `RouterVenue` covers all
//! three.

use alloy::primitives::{Address, U256};
use tracing::warn;

use super::types::{Quote, Venue};
use crate::blockchain::{
    parse_address, router::RouterContract, ChainError, Erc20Token, PolygonClient, USDC_TOKEN,
    WMATIC_TOKEN,
};

/// Router quotes land in DAI, which carries 18 decimals.
const ROUTER_QUOTE_DECIMALS: u8 = 18;

/// One router venue: where its router lives and which token bridges the
/// two-hop path.
///
/// None of these venues carries enough direct liquidity against DAI, so the
/// swap is always quoted through a bridge hop.
#[derive(Debug, Clone, Copy)]
pub struct RouterVenue {
    pub venue: Venue,
    router: &'static str,
    bridge: &'static Erc20Token,
}

pub const APESWAP: RouterVenue = RouterVenue {
    venue: Venue::ApeSwap,
    router: "0xc0788a3ad43d79aa53b09c2eacc313a787d1d607",
    bridge: &WMATIC_TOKEN,
};

pub const CAFESWAP: RouterVenue = RouterVenue {
    venue: Venue::CafeSwap,
    router: "0x9055682e58c74fc8ddbfc55ad2428ab1f96098fc",
    bridge: &USDC_TOKEN,
};

pub const QUICKSWAP: RouterVenue = RouterVenue {
    venue: Venue::QuickSwap,
    router: "0xa5e0829caced8ffdd4de3c43696c57f7d7a678ff",
    bridge: &USDC_TOKEN,
};

/// All router venues, in `Venue` declaration order.
pub const ROUTER_VENUES: [&RouterVenue; 3] = [&APESWAP, &CAFESWAP, &QUICKSWAP];

impl RouterVenue {
    /// Quote selling `amount` base units of `from` for `to` on this venue.
    ///
    /// An absent or zero amount short-circuits to the sentinel without an RPC
    /// call. Reverts (routers revert on missing liquidity), transport
    /// failures and unbuildable handles all collapse into the sentinel after
    /// a warn log.
    pub async fn quote(
        &self,
        client: &PolygonClient,
        amount: Option<U256>,
        from: Address,
        to: Address,
    ) -> Quote {
        let Some(amount) = amount.filter(|a| !a.is_zero()) else {
            return Quote::unavailable();
        };

        match self.fetch_quote(client, amount, from, to).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(
                    venue = %self.venue,
                    from = %from,
                    to = %to,
                    error = %e,
                    "Router quote unavailable"
                );
                Quote::unavailable()
            }
        }
    }

    async fn fetch_quote(
        &self,
        client: &PolygonClient,
        amount: U256,
        from: Address,
        to: Address,
    ) -> Result<Quote, ChainError> {
        let router = RouterContract::new(client.provider(), self.router)?;
        let amounts = router.amounts_out(amount, self.swap_path(from, to)?).await?;
        let out = amounts.last().copied().ok_or_else(|| {
            ChainError::ContractError("getAmountsOut returned no amounts".to_string())
        })?;

        Ok(Quote::from_units(out, ROUTER_QUOTE_DECIMALS))
    }

    /// The quoted route: always `[from, bridge, to]`.
    fn swap_path(&self, from: Address, to: Address) -> Result<Vec<Address>, ChainError> {
        let bridge = parse_address(self.bridge.address)?;
        Ok(vec![from, bridge, to])
    }
}
