// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! UniswapV2-style router contract interactions.
//!
//! ApeSwap, CafeSwap and QuickSwap all expose the same router ABI; only the
//! deployed address differs, so one binding serves all three venues.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::client::{parse_address, ChainError};

// Read-only subset of the UniswapV2 Router02 ABI
sol! {
    #[sol(rpc)]
    interface IUniswapV2Router02 {
        function getAmountsOut(uint256 amountIn, address[] calldata path)
            external view returns (uint256[] memory amounts);
    }
}

/// Router contract wrapper.
pub struct RouterContract<P> {
    contract: IUniswapV2Router02::IUniswapV2Router02Instance<P>,
}

impl<P: Provider + Clone> RouterContract<P> {
    /// Create a new router contract instance.
    ///
    /// Fails if the address is malformed or the zero address.
    pub fn new(provider: &P, contract_address: &str) -> Result<Self, ChainError> {
        let address = parse_address(contract_address)?;
        let contract = IUniswapV2Router02::new(address, provider.clone());

        Ok(Self { contract })
    }

    /// Quote a swap along `path`, one output amount per hop.
    ///
    /// Reverts (no liquidity, zero input) surface as `ContractError`.
    pub async fn amounts_out(
        &self,
        amount_in: U256,
        path: Vec<Address>,
    ) -> Result<Vec<U256>, ChainError> {
        self.contract
            .getAmountsOut(amount_in, path)
            .call()
            .await
            .map_err(|e| ChainError::ContractError(e.to_string()))
    }
}
