// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Quote acquisition and selection across the four venues.

pub mod oneinch;
pub mod select;
pub mod types;
pub mod venues;

pub use oneinch::OneInchClient;
pub use select::best_quote;
pub use types::{BestQuote, Quote, QuoteSet, Venue};
pub use venues::{RouterVenue, ROUTER_VENUES};
