// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Best-venue selection over one token's quote set.

use super::types::{BestQuote, QuoteSet};

/// Pick the venue with the highest numeric quote.
///
/// Venues are scanned in declaration order against a running best of
/// `(None, 0.0)`; only a strictly greater value displaces the best, so ties
/// keep the earlier venue and the sentinel (`-1`), zero and NaN can never
/// win.
pub fn best_quote(quotes: &QuoteSet) -> BestQuote {
    let mut best = BestQuote::none();
    for (venue, quote) in quotes.iter() {
        let value = quote.value();
        if value > best.value {
            best = BestQuote {
                venue: Some(venue),
                value,
            };
        }
    }
    best
}
