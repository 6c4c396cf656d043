// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Polygon PoS client for read-only blockchain queries.

use std::str::FromStr;

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
};

use super::erc20::Erc20Contract;
use super::types::{Erc20Token, NetworkConfig, TokenBalance, POLYGON_MAINNET};

/// HTTP provider type for Polygon PoS (with all fillers).
pub type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Polygon PoS client.
///
/// One RPC connection, passed explicitly to every quote computation instead
/// of living as ambient state.
pub struct PolygonClient {
    /// Network configuration
    network: NetworkConfig,
    /// Alloy HTTP provider
    provider: HttpProvider,
}

impl PolygonClient {
    /// Create a client for Polygon PoS against the given RPC endpoint.
    pub fn connect(rpc_url: &str) -> Result<Self, ChainError> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e: url::ParseError| ChainError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self {
            network: POLYGON_MAINNET,
            provider,
        })
    }

    /// Get the current block number.
    pub async fn block_number(&self) -> Result<u64, ChainError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ChainError::RpcError(e.to_string()))
    }

    /// Get the raw and formatted ERC-20 balance of `wallet` for one token.
    pub async fn token_balance(
        &self,
        wallet: Address,
        token: &Erc20Token,
    ) -> Result<TokenBalance, ChainError> {
        let contract = Erc20Contract::new(&self.provider, token.address)?;
        let raw: U256 = contract.balance_of(wallet).await?;
        Ok(TokenBalance::new(raw, token.decimals))
    }

    /// Get balances for all `tokens`, one slot per token in input order.
    ///
    /// A failed read logs a warning and leaves its slot empty; other tokens
    /// are unaffected.
    pub async fn wallet_balances(
        &self,
        wallet: Address,
        tokens: &[&Erc20Token],
    ) -> Vec<Option<TokenBalance>> {
        let mut balances = Vec::with_capacity(tokens.len());
        for token in tokens {
            match self.token_balance(wallet, token).await {
                Ok(balance) => balances.push(Some(balance)),
                Err(e) => {
                    tracing::warn!(token = token.symbol, error = %e, "Failed to read balance");
                    balances.push(None);
                }
            }
        }
        balances
    }

    /// Get the network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// Get the underlying provider, for building contract handles.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }
}

/// Parse an address string, rejecting malformed input and the zero address.
pub fn parse_address(value: &str) -> Result<Address, ChainError> {
    let address =
        Address::from_str(value).map_err(|e| ChainError::InvalidAddress(e.to_string()))?;
    if address == Address::ZERO {
        return Err(ChainError::InvalidAddress(format!(
            "zero address `{value}` is not usable"
        )));
    }
    Ok(address)
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Contract error: {0}")]
    ContractError(String),
}
