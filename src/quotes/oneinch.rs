// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Swapboard Authors

//! 1inch aggregator integration for swap quotes.

use std::time::Duration;

use alloy::primitives::{Address, U256};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::types::Quote;

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("aggregator request failed: {0}")]
    Request(String),

    #[error("aggregator rejected the swap: {0}")]
    Rejected(String),

    #[error("aggregator response was invalid: {0}")]
    InvalidResponse(String),
}

/// Client for the 1inch `/quote` endpoint.
///
/// `quote` never fails: every error path collapses into the sentinel after a
/// warn log, so a venue outage degrades one cell of the board and nothing
/// else.
#[derive(Debug, Clone)]
pub struct OneInchClient {
    base_url: String,
    http: Client,
}

impl OneInchClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AggregatorError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AggregatorError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Quote selling `amount` base units of `from` for `to`.
    ///
    /// An absent or zero amount short-circuits to the sentinel without
    /// issuing a request; the aggregator answers amount-0 quotes with an
    /// error anyway.
    pub async fn quote(&self, amount: Option<U256>, from: Address, to: Address) -> Quote {
        let Some(amount) = amount.filter(|a| !a.is_zero()) else {
            return Quote::unavailable();
        };

        match self.fetch_quote(amount, from, to).await {
            Ok(quote) => quote,
            Err(e) => {
                warn!(from = %from, to = %to, error = %e, "Aggregator quote unavailable");
                Quote::unavailable()
            }
        }
    }

    async fn fetch_quote(
        &self,
        amount: U256,
        from: Address,
        to: Address,
    ) -> Result<Quote, AggregatorError> {
        let response = self
            .http
            .get(format!("{}/quote", self.base_url.trim_end_matches('/')))
            .query(&[
                ("fromTokenAddress", from.to_string()),
                ("toTokenAddress", to.to_string()),
                ("amount", amount.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AggregatorError::Request(format!("GET /quote failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AggregatorError::Request(format!(
                "GET /quote returned {status}: {body}"
            )));
        }

        let payload: QuotePayload = response
            .json()
            .await
            .map_err(|e| AggregatorError::InvalidResponse(format!("GET /quote invalid JSON: {e}")))?;

        quote_from_payload(payload)
    }
}

/// Body of a `/quote` response. 2xx bodies can still carry an error object,
/// e.g. insufficient liquidity, so every field is optional and sorted out
/// after deserialization.
#[derive(Debug, Deserialize)]
struct QuotePayload {
    error: Option<Value>,
    description: Option<String>,
    #[serde(rename = "toTokenAmount")]
    to_token_amount: Option<String>,
    #[serde(rename = "toToken")]
    to_token: Option<DestinationToken>,
}

#[derive(Debug, Deserialize)]
struct DestinationToken {
    decimals: u8,
}

/// Extract the destination amount from a `/quote` payload, scaled by the
/// decimals the payload itself reports for the destination token.
fn quote_from_payload(payload: QuotePayload) -> Result<Quote, AggregatorError> {
    if payload.error.is_some() {
        let reason = payload.description.as_deref().unwrap_or("no description");
        return Err(AggregatorError::Rejected(reason.to_string()));
    }

    let raw_amount = payload.to_token_amount.ok_or_else(|| {
        AggregatorError::InvalidResponse("missing toTokenAmount in response".to_string())
    })?;
    let amount = U256::from_str_radix(&raw_amount, 10).map_err(|e| {
        AggregatorError::InvalidResponse(format!("toTokenAmount is not a base-unit integer: {e}"))
    })?;

    let decimals = payload.to_token.map(|token| token.decimals).ok_or_else(|| {
        AggregatorError::InvalidResponse("missing toToken.decimals in response".to_string())
    })?;

    Ok(Quote::from_units(amount, decimals))
}

#[cfg(test)]
mod tests {
    use std::io::{Read as _, Write as _};
    use std::net::TcpListener;
    use std::thread;

    use serde_json::json;

    use super::*;
    use crate::blockchain::{DAI_TOKEN, SHI3LD_TOKEN};

    fn from_address() -> Address {
        SHI3LD_TOKEN.address.parse().unwrap()
    }

    fn to_address() -> Address {
        DAI_TOKEN.address.parse().unwrap()
    }

    /// Serve exactly one canned HTTP response on a fresh local port.
    fn serve_once(status_line: &str, body: String) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            stream.write_all(response.as_bytes()).unwrap();
        });
        (base_url, handle)
    }

    fn payload(value: serde_json::Value) -> QuotePayload {
        serde_json::from_value(value).expect("test payload deserializes")
    }

    #[test]
    fn parse_scales_by_the_decimals_in_the_payload() {
        let quote = quote_from_payload(payload(json!({
            "fromToken": { "symbol": "SHI3LD", "decimals": 18 },
            "toToken": { "symbol": "DAI", "decimals": 18 },
            "toTokenAmount": "2500000000000000000000",
            "estimatedGas": 210000
        })))
        .unwrap();
        assert_eq!(quote.as_str(), "2500");
    }

    #[test]
    fn parse_honors_six_decimal_destinations() {
        let quote = quote_from_payload(payload(json!({
            "toToken": { "symbol": "USDC", "decimals": 6 },
            "toTokenAmount": "2500000"
        })))
        .unwrap();
        assert_eq!(quote.as_str(), "2.5");
    }

    #[test]
    fn parse_rejects_error_payloads() {
        let err = quote_from_payload(payload(json!({
            "statusCode": 400,
            "error": "Bad Request",
            "description": "insufficient liquidity"
        })))
        .unwrap_err();
        assert!(matches!(err, AggregatorError::Rejected(_)));
        assert!(err.to_string().contains("insufficient liquidity"));
    }

    #[test]
    fn parse_rejects_missing_or_malformed_amounts() {
        let missing = payload(json!({ "toToken": { "decimals": 18 } }));
        assert!(matches!(
            quote_from_payload(missing),
            Err(AggregatorError::InvalidResponse(_))
        ));

        let malformed = payload(json!({
            "toToken": { "decimals": 18 },
            "toTokenAmount": "12.5"
        }));
        assert!(matches!(
            quote_from_payload(malformed),
            Err(AggregatorError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn zero_or_absent_amount_never_touches_the_network() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let client =
            OneInchClient::new(format!("http://{}", listener.local_addr().unwrap())).unwrap();

        let absent = client.quote(None, from_address(), to_address()).await;
        let zero = client
            .quote(Some(U256::ZERO), from_address(), to_address())
            .await;

        assert!(absent.is_unavailable());
        assert!(zero.is_unavailable());
        let err = listener.accept().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::WouldBlock);
    }

    #[tokio::test]
    async fn successful_response_becomes_a_scaled_quote() {
        let body = json!({
            "toToken": { "symbol": "DAI", "decimals": 18 },
            "toTokenAmount": "1500000000000000000"
        })
        .to_string();
        let (base_url, server) = serve_once("200 OK", body);
        let client = OneInchClient::new(base_url).unwrap();

        let quote = client
            .quote(Some(U256::from(10u64)), from_address(), to_address())
            .await;

        assert_eq!(quote.as_str(), "1.5");
        server.join().unwrap();
    }

    #[tokio::test]
    async fn http_error_status_collapses_to_the_sentinel() {
        let (base_url, server) = serve_once(
            "500 Internal Server Error",
            json!({ "error": "server exploded" }).to_string(),
        );
        let client = OneInchClient::new(base_url).unwrap();

        let quote = client
            .quote(Some(U256::from(10u64)), from_address(), to_address())
            .await;

        assert!(quote.is_unavailable());
        server.join().unwrap();
    }

    #[tokio::test]
    async fn transport_failure_collapses_to_the_sentinel() {
        // Bind then drop to find a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = OneInchClient::new(base_url).unwrap();

        let quote = client
            .quote(Some(U256::from(10u64)), from_address(), to_address())
            .await;

        assert!(quote.is_unavailable());
    }
}
