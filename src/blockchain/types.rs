// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Polygon network configuration, the static token registry, and unit
//! formatting helpers shared by the chain client and the renderer.

use alloy::primitives::U256;

/// Polygon network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// Polygon PoS Mainnet configuration.
pub const POLYGON_MAINNET: NetworkConfig = NetworkConfig {
    name: "Polygon PoS",
    chain_id: 137,
    rpc_url: "https://polygon-rpc.com",
    explorer_url: "https://polygonscan.com",
};

/// An ERC-20 token known to the dashboard.
///
/// Addresses are stored lowercase; `alloy` re-checksums on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Erc20Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u8,
    /// Polygon PoS contract address
    pub address: &'static str,
}

/// PolyShield governance token.
pub const SHI3LD_TOKEN: Erc20Token = Erc20Token {
    symbol: "SHI3LD",
    name: "PolyShield",
    decimals: 18,
    address: "0xf239e69ce434c7fb408b05a0da416b14917d934e",
};

/// KogeCoin farm token.
pub const KOGE_TOKEN: Erc20Token = Erc20Token {
    symbol: "KOGE",
    name: "KogeCoin",
    decimals: 18,
    address: "0x13748d548d95d78a3c83fe3f32604b4796cffa23",
};

/// PearZap farm token.
pub const PEAR_TOKEN: Erc20Token = Erc20Token {
    symbol: "PEAR",
    name: "Pear Token",
    decimals: 18,
    address: "0xc8bcb58caef1be972c0b638b1dd8b0748fdc8a44",
};

/// Singular farm token.
pub const SING_TOKEN: Erc20Token = Erc20Token {
    symbol: "SING",
    name: "Sing Token",
    decimals: 18,
    address: "0xcb898b0efb084df14dd8e018da37b4d0f06ab26d",
};

/// Reference stablecoin every quote is expressed in.
pub const DAI_TOKEN: Erc20Token = Erc20Token {
    symbol: "DAI",
    name: "Dai Stablecoin (PoS)",
    decimals: 18,
    address: "0x8f3cf7ad23cd3cadbd9735aff958023239c6a063",
};

/// Wrapped MATIC, bridging token for ApeSwap paths.
pub const WMATIC_TOKEN: Erc20Token = Erc20Token {
    symbol: "WMATIC",
    name: "Wrapped Matic",
    decimals: 18,
    address: "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270",
};

/// Bridged USDC, bridging token for CafeSwap and QuickSwap paths.
pub const USDC_TOKEN: Erc20Token = Erc20Token {
    symbol: "USDC",
    name: "USD Coin (PoS)",
    decimals: 6,
    address: "0x2791bca1f2de4661ed88a30c99a7a9449aa84174",
};

/// The tokens the dashboard tracks, in display order.
pub const TRACKED_TOKENS: [&Erc20Token; 4] =
    [&SHI3LD_TOKEN, &KOGE_TOKEN, &PEAR_TOKEN, &SING_TOKEN];

/// A wallet's balance for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    /// Balance in base units (before decimal scaling)
    pub raw: U256,
    /// Balance scaled by the token's decimals, full precision
    pub formatted: String,
}

impl TokenBalance {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self {
            formatted: format_units(raw, decimals),
            raw,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }
}

/// Scale a base-unit amount by `decimals` at full precision.
///
/// The result feeds numeric comparison downstream, so trailing zeros are
/// trimmed but no digits are dropped: `1_234_567_890_000_000_000` at 18
/// decimals is `"1.23456789"`, not `"1.234567"`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = decimal_str.trim_end_matches('0');
        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{whole}.{trimmed}")
        }
    }
}
