// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! Terminal rendering for board snapshots.
//!
//! Two tables per snapshot: the balances table with the best venue per
//! token, and the full per-venue quote matrix.

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::board::{BoardSnapshot, TokenRow};
use crate::quotes::Quote;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Best Swap")]
    best_swap: String,
    #[tabled(rename = "Quote")]
    quote: String,
    #[tabled(rename = "Value (DAI)")]
    value: String,
}

#[derive(Tabled)]
struct QuoteMatrixRow {
    #[tabled(rename = "(Token)")]
    token: String,
    #[tabled(rename = "1inch")]
    oneinch: String,
    #[tabled(rename = "ApeSwap")]
    apeswap: String,
    #[tabled(rename = "CafeSwap")]
    cafeswap: String,
    #[tabled(rename = "QuickSwap")]
    quickswap: String,
}

/// Render one snapshot as the full dashboard: header line, balances table,
/// quote matrix.
pub fn render_snapshot(snapshot: &BoardSnapshot, precision: u32) -> String {
    let block = match snapshot.block_number {
        Some(block) => block.to_string(),
        None => "unavailable".to_string(),
    };
    let taken_at = snapshot.taken_at.format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        "Current block: {block} (sweep {generation}, {taken_at})\n\nBalances\n{balances}\n\nQuotes\n{quotes}\n",
        generation = snapshot.generation,
        balances = balances_table(&snapshot.rows, precision),
        quotes = quotes_table(&snapshot.rows, precision),
    )
}

/// The balances table: one row per tracked token with its best venue.
pub fn balances_table(rows: &[TokenRow], precision: u32) -> String {
    let display_rows: Vec<BalanceRow> = rows.iter().map(|row| balance_row(row, precision)).collect();

    Table::new(display_rows)
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// The quote matrix: one row per tracked token, one column per venue.
pub fn quotes_table(rows: &[TokenRow], precision: u32) -> String {
    let display_rows: Vec<QuoteMatrixRow> = rows
        .iter()
        .map(|row| QuoteMatrixRow {
            token: row.token.symbol.to_string(),
            oneinch: display_quote(&row.quotes.oneinch, precision),
            apeswap: display_quote(&row.quotes.apeswap, precision),
            cafeswap: display_quote(&row.quotes.cafeswap, precision),
            quickswap: display_quote(&row.quotes.quickswap, precision),
        })
        .collect();

    Table::new(display_rows)
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn balance_row(row: &TokenRow, precision: u32) -> BalanceRow {
    let amount = row
        .balance
        .as_ref()
        .map(|balance| balance.formatted.clone())
        .unwrap_or_default();

    let (best_swap, quote, value) = match row.best.venue {
        Some(venue) => {
            let value = row
                .balance
                .as_ref()
                .and_then(|balance| balance.formatted.parse::<f64>().ok())
                .map(|amount| to_precision(amount * row.best.value, precision))
                .unwrap_or_default();
            (
                venue.to_string(),
                to_precision(row.best.value, precision),
                value,
            )
        }
        None => ("-".to_string(), "-".to_string(), String::new()),
    };

    BalanceRow {
        currency: row.token.symbol.to_string(),
        amount,
        best_swap,
        quote,
        value,
    }
}

/// Render one quote cell: the sentinel (and anything unparseable) becomes
/// the placeholder, everything else is rounded to `precision` significant
/// figures.
pub fn display_quote(quote: &Quote, precision: u32) -> String {
    if quote.is_unavailable() {
        return "-".to_string();
    }
    let value = quote.value();
    if value.is_nan() {
        return "-".to_string();
    }
    to_precision(value, precision)
}

/// Round to `digits` significant figures, always in fixed notation.
pub fn to_precision(value: f64, digits: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", digits.saturating_sub(1) as usize, 0.0);
    }

    // Round before laying out digits: a carry across a power of ten
    // (999.9999 -> 1000.00 at six figures) changes how many fractional
    // digits the figure count leaves room for.
    let rounded = round_to_figures(value, digits);
    let magnitude = rounded.abs().log10().floor() as i32;
    let decimals = digits as i32 - 1 - magnitude;
    if decimals > 0 {
        format!("{:.*}", decimals as usize, rounded)
    } else {
        // More integer digits than significant ones: a rounded whole number.
        format!("{:.0}", rounded)
    }
}

fn round_to_figures(value: f64, digits: u32) -> f64 {
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits as i32 - 1 - magnitude);
    if !factor.is_finite() || factor == 0.0 {
        return value;
    }
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;
    use crate::blockchain::{TokenBalance, SHI3LD_TOKEN};
    use crate::quotes::{best_quote, QuoteSet};

    #[test]
    fn to_precision_keeps_six_significant_figures() {
        assert_eq!(to_precision(123.456789123, 6), "123.457");
        assert_eq!(to_precision(7.2, 6), "7.20000");
        assert_eq!(to_precision(0.000012345678, 6), "0.0000123457");
        assert_eq!(to_precision(-7.2, 6), "-7.20000");
        assert_eq!(to_precision(0.0, 6), "0.00000");

        // Rounding that carries across a power of ten still keeps six
        assert_eq!(to_precision(999.9999, 6), "1000.00");
        assert_eq!(to_precision(0.99999999, 6), "1.00000");
    }

    #[test]
    fn to_precision_rounds_wide_integers_to_powers_of_ten() {
        assert_eq!(to_precision(1234567.0, 6), "1234570");
        assert_eq!(to_precision(987654321.0, 3), "988000000");
        assert_eq!(to_precision(999.99, 3), "1000");
    }

    #[test]
    fn display_quote_renders_the_placeholder_for_the_sentinel() {
        assert_eq!(display_quote(&Quote::unavailable(), 6), "-");
        assert_eq!(display_quote(&Quote::from_raw("garbage"), 6), "-");
        assert_eq!(display_quote(&Quote::from_raw("123.456789123"), 6), "123.457");
    }

    fn row_with(balance: Option<TokenBalance>, quotes: QuoteSet) -> TokenRow {
        let best = best_quote(&quotes);
        TokenRow {
            token: &SHI3LD_TOKEN,
            balance,
            quotes,
            best,
        }
    }

    #[test]
    fn balance_row_multiplies_amount_by_the_best_quote() {
        let quotes = QuoteSet {
            cafeswap: Quote::from_raw("3.5"),
            ..QuoteSet::unavailable()
        };
        let row = row_with(Some(TokenBalance::new(U256::from(2_000_000u64), 6)), quotes);
        let rendered = balance_row(&row, 6);

        assert_eq!(rendered.currency, "SHI3LD");
        assert_eq!(rendered.amount, "2");
        assert_eq!(rendered.best_swap, "CafeSwap");
        assert_eq!(rendered.quote, "3.50000");
        assert_eq!(rendered.value, "7.00000");
    }

    #[test]
    fn balance_row_degrades_when_no_venue_wins() {
        let row = row_with(
            Some(TokenBalance::new(U256::ZERO, 18)),
            QuoteSet::unavailable(),
        );
        let rendered = balance_row(&row, 6);

        assert_eq!(rendered.amount, "0");
        assert_eq!(rendered.best_swap, "-");
        assert_eq!(rendered.quote, "-");
        assert_eq!(rendered.value, "");
    }

    #[test]
    fn balance_row_leaves_amount_blank_when_the_read_failed() {
        let rendered = balance_row(&row_with(None, QuoteSet::unavailable()), 6);
        assert_eq!(rendered.amount, "");
        assert_eq!(rendered.value, "");
    }

    #[test]
    fn tables_carry_the_dashboard_headers() {
        let row = row_with(None, QuoteSet::unavailable());
        let balances = balances_table(std::slice::from_ref(&row), 6);
        for header in ["Currency", "Amount", "Best Swap", "Quote", "Value (DAI)"] {
            assert!(balances.contains(header), "missing header {header}");
        }

        let quotes = quotes_table(std::slice::from_ref(&row), 6);
        for header in ["(Token)", "1inch", "ApeSwap", "CafeSwap", "QuickSwap"] {
            assert!(quotes.contains(header), "missing header {header}");
        }
    }

    #[test]
    fn rendered_matrix_shows_placeholders_for_sentinels() {
        let quotes = QuoteSet {
            oneinch: Quote::from_raw("12.5"),
            ..QuoteSet::unavailable()
        };
        let row = row_with(None, quotes);
        let table = quotes_table(std::slice::from_ref(&row), 6);
        assert!(table.contains("12.5000"));
        assert!(table.contains('-'));
    }

    #[test]
    fn snapshot_header_reports_the_block_number() {
        let snapshot = BoardSnapshot {
            generation: 3,
            taken_at: chrono::Utc::now(),
            block_number: Some(52_341_234),
            rows: vec![row_with(None, QuoteSet::unavailable())],
        };
        let rendered = render_snapshot(&snapshot, 6);
        assert!(rendered.contains("Current block: 52341234"));
        assert!(rendered.contains("sweep 3"));
        assert!(rendered.contains("Balances"));
        assert!(rendered.contains("Quotes"));

        let unavailable = BoardSnapshot {
            block_number: None,
            ..snapshot
        };
        assert!(render_snapshot(&unavailable, 6).contains("Current block: unavailable"));
    }
}
