// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! ERC-20 token contract interactions.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::client::{parse_address, ChainError};

// The balance sweep only ever reads balances; token metadata comes from the
// static registry, so the binding stays at this one function.
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
    }
}

/// ERC-20 contract wrapper.
pub struct Erc20Contract<P> {
    contract: IERC20::IERC20Instance<P>,
}

impl<P: Provider + Clone> Erc20Contract<P> {
    /// Create a new ERC-20 contract instance.
    ///
    /// Fails if the address is malformed or the zero address.
    pub fn new(provider: &P, contract_address: &str) -> Result<Self, ChainError> {
        let address = parse_address(contract_address)?;
        let contract = IERC20::new(address, provider.clone());

        Ok(Self { contract })
    }

    /// Get the raw base-unit balance of an address.
    pub async fn balance_of(&self, wallet: Address) -> Result<U256, ChainError> {
        self.contract
            .balanceOf(wallet)
            .call()
            .await
            .map_err(|e| ChainError::ContractError(e.to_string()))
    }
}
