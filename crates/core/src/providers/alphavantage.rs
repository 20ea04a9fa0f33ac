use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::QuoteProvider;
use crate::errors::CoreError;
use crate::models::quote::Quote;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage GLOBAL_QUOTE provider.
///
/// - **Free tier**: heavily rate limited; expect "not available" answers
///   once the daily budget is spent.
/// - **Requires**: API key (set via settings as "alphavantage").
/// - **Shape**: price and change come back as plain decimal strings, the
///   percent change as a `%`-suffixed string (e.g., `"1.2345%"`).
///
/// Anything other than a well-formed response with all three fields is
/// reported as an error so the refresh pipeline can substitute a
/// synthetic quote.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

#[derive(Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,

    #[serde(rename = "09. change")]
    change: Option<String>,

    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

/// Parse a plain decimal field, mapping failure to a malformed-quote error.
fn parse_field(symbol: &str, field: &str, raw: &str) -> Result<f64, CoreError> {
    raw.trim().parse().map_err(|_| CoreError::MalformedQuote {
        symbol: symbol.to_string(),
        message: format!("{field}: {raw:?} is not a decimal"),
    })
}

/// Parse the `%`-suffixed percent field (e.g., `"1.2345%"` → `1.2345`).
fn parse_percent_field(symbol: &str, raw: &str) -> Result<f64, CoreError> {
    let stripped = raw.trim().trim_end_matches('%');
    stripped.parse().map_err(|_| CoreError::MalformedQuote {
        symbol: symbol.to_string(),
        message: format!("change percent: {raw:?} is not a percent value"),
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        let symbol = symbol.to_uppercase();
        let resp: GlobalQuoteResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", &symbol),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse quote for {symbol}: {e}"),
            })?;

        let quote = resp.global_quote.ok_or_else(|| CoreError::Api {
            provider: "Alpha Vantage".into(),
            message: format!("No quote data for {symbol}. API limit may be exceeded."),
        })?;

        let missing = |field: &str| CoreError::MalformedQuote {
            symbol: symbol.clone(),
            message: format!("missing field {field}"),
        };

        let price = parse_field(
            &symbol,
            "price",
            &quote.price.ok_or_else(|| missing("05. price"))?,
        )?;
        let change = parse_field(
            &symbol,
            "change",
            &quote.change.ok_or_else(|| missing("09. change"))?,
        )?;
        let change_percent = parse_percent_field(
            &symbol,
            &quote
                .change_percent
                .ok_or_else(|| missing("10. change percent"))?,
        )?;

        Ok(Quote {
            symbol,
            price,
            change,
            change_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_field_strips_suffix() {
        assert_eq!(parse_percent_field("AAPL", "1.2345%").unwrap(), 1.2345);
    }

    #[test]
    fn percent_field_negative() {
        assert_eq!(parse_percent_field("AAPL", "-0.42%").unwrap(), -0.42);
    }

    #[test]
    fn percent_field_without_suffix_still_parses() {
        assert_eq!(parse_percent_field("AAPL", "2.5").unwrap(), 2.5);
    }

    #[test]
    fn percent_field_garbage_is_rejected() {
        assert!(parse_percent_field("AAPL", "n/a").is_err());
    }

    #[test]
    fn decimal_field_garbage_is_rejected() {
        let err = parse_field("AAPL", "price", "--").unwrap_err();
        assert!(matches!(err, CoreError::MalformedQuote { .. }));
    }
}
