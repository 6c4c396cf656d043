// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Quote domain types.
//!
//! A venue quote is a decimal string of DAI units, or the `"-1"` sentinel
//! meaning "no valid quote". Venue failures of any kind collapse into the
//! sentinel at the adapter boundary, so nothing above the adapters ever
//! handles a quote error.

use std::fmt;

use alloy::primitives::U256;

use crate::blockchain::format_units;

/// A swap quote in destination-token units, or the failure sentinel.
///
/// Public constructors only produce non-negative decimal amounts or exactly
/// the sentinel; no other value exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote(String);

impl Quote {
    /// The "no valid quote" sentinel.
    pub const SENTINEL: &'static str = "-1";

    /// The sentinel quote.
    pub fn unavailable() -> Self {
        Self(Self::SENTINEL.to_string())
    }

    /// A quote from a base-unit output amount, scaled by `decimals` at full
    /// precision.
    pub fn from_units(amount: U256, decimals: u8) -> Self {
        Self(format_units(amount, decimals))
    }

    /// Escape hatch for exercising the selector with arbitrary strings.
    #[cfg(test)]
    pub(crate) fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_unavailable(&self) -> bool {
        self.0 == Self::SENTINEL
    }

    /// Numeric value for comparison; malformed input becomes NaN, which never
    /// beats a real quote.
    pub fn value(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Quote {
    /// Quotes start unavailable and stay that way until a venue answers.
    fn default() -> Self {
        Self::unavailable()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The liquidity venues the dashboard compares, in evaluation order.
///
/// The order is part of the selection contract: a later venue only takes
/// the win with a strictly greater value, so ties keep the earlier venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    OneInch,
    ApeSwap,
    CafeSwap,
    QuickSwap,
}

impl Venue {
    /// All venues in evaluation order.
    pub const ALL: [Venue; 4] = [
        Venue::OneInch,
        Venue::ApeSwap,
        Venue::CafeSwap,
        Venue::QuickSwap,
    ];

    /// Display label, matching the dashboard column headers.
    pub fn label(&self) -> &'static str {
        match self {
            Venue::OneInch => "1inch",
            Venue::ApeSwap => "ApeSwap",
            Venue::CafeSwap => "CafeSwap",
            Venue::QuickSwap => "QuickSwap",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One token's quotes across all venues, built fresh each sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSet {
    pub oneinch: Quote,
    pub apeswap: Quote,
    pub cafeswap: Quote,
    pub quickswap: Quote,
}

impl QuoteSet {
    /// A set with every slot at the sentinel.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn get(&self, venue: Venue) -> &Quote {
        match venue {
            Venue::OneInch => &self.oneinch,
            Venue::ApeSwap => &self.apeswap,
            Venue::CafeSwap => &self.cafeswap,
            Venue::QuickSwap => &self.quickswap,
        }
    }

    pub fn set(&mut self, venue: Venue, quote: Quote) {
        match venue {
            Venue::OneInch => self.oneinch = quote,
            Venue::ApeSwap => self.apeswap = quote,
            Venue::CafeSwap => self.cafeswap = quote,
            Venue::QuickSwap => self.quickswap = quote,
        }
    }

    /// Iterate slots in `Venue::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Venue, &Quote)> {
        Venue::ALL.into_iter().map(move |venue| (venue, self.get(venue)))
    }
}

/// The winning venue and its numeric quote for one token.
///
/// `venue` is `None` and `value` is `0.0` when no venue returned a positive
/// quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestQuote {
    pub venue: Option<Venue>,
    pub value: f64,
}

impl BestQuote {
    pub fn none() -> Self {
        Self {
            venue: None,
            value: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_the_literal_minus_one() {
        let quote = Quote::unavailable();
        assert!(quote.is_unavailable());
        assert_eq!(quote.as_str(), "-1");
        assert_eq!(quote.to_string(), "-1");
    }

    #[test]
    fn from_units_produces_nonnegative_decimal_strings() {
        let quote = Quote::from_units(U256::from(1_500_000_000_000_000_000u64), 18);
        assert_eq!(quote.as_str(), "1.5");
        assert!(!quote.is_unavailable());
        assert_eq!(quote.value(), 1.5);

        let zero = Quote::from_units(U256::ZERO, 18);
        assert_eq!(zero.as_str(), "0");
        assert!(!zero.is_unavailable());
    }

    #[test]
    fn default_quote_is_unavailable() {
        assert!(Quote::default().is_unavailable());
        assert!(QuoteSet::unavailable().iter().all(|(_, q)| q.is_unavailable()));
    }

    #[test]
    fn malformed_values_parse_to_nan() {
        assert!(Quote::from_raw("garbage").value().is_nan());
        assert_eq!(Quote::unavailable().value(), -1.0);
    }

    #[test]
    fn quote_set_iterates_in_venue_order() {
        let set = QuoteSet {
            oneinch: Quote::from_raw("1"),
            apeswap: Quote::from_raw("2"),
            cafeswap: Quote::from_raw("3"),
            quickswap: Quote::from_raw("4"),
        };
        let order: Vec<Venue> = set.iter().map(|(v, _)| v).collect();
        assert_eq!(order.as_slice(), Venue::ALL.as_slice());
        let values: Vec<&str> = set.iter().map(|(_, q)| q.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn venue_labels_match_column_headers() {
        let labels: Vec<&str> = Venue::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, vec!["1inch", "ApeSwap", "CafeSwap", "QuickSwap"]);
    }
}
