use futures::future::join_all;
use rand::Rng;
use tracing::{info, warn};

use crate::models::position::Position;
use crate::models::quote::{Quote, QuoteBatch, QuoteSource};
use crate::providers::registry::QuoteProviderRegistry;

/// Baseline price used to synthesize a quote for a symbol with no
/// matching position.
pub const FALLBACK_BASELINE_PRICE: f64 = 100.0;

/// Half-width of the synthetic perturbation range: ±2.5%.
const SYNTHETIC_VOLATILITY: f64 = 0.05;

/// Advisory shown while the portfolio runs on simulated prices.
pub const SIMULATED_DATA_ADVISORY: &str =
    "Live quotes unavailable — using simulated prices.";

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Fetches quotes from the provider registry with synthetic fallback.
///
/// Per-symbol contract: a refresh batch always yields exactly one quote
/// per requested symbol. A symbol whose live fetch fails (network error,
/// malformed body, missing field) gets a synthesized quote derived from
/// its last known price instead; the failure never propagates past this
/// service.
pub struct QuoteService {
    registry: QuoteProviderRegistry,
}

impl QuoteService {
    pub fn new(registry: QuoteProviderRegistry) -> Self {
        Self { registry }
    }

    /// True when at least one live quote source is configured.
    pub fn has_live_source(&self) -> bool {
        self.registry.has_providers()
    }

    /// Names of the configured providers, in fallback order.
    pub fn provider_names(&self) -> Vec<String> {
        self.registry.provider_names()
    }

    /// Fetch one quote per requested symbol.
    ///
    /// Symbols are fetched concurrently — the batch completes when the
    /// slowest individual fetch does, not after their sum. The returned
    /// batch carries an advisory when every quote had to be synthesized
    /// (no provider configured, or all fetches failed).
    pub async fn refresh_quotes(&self, positions: &[Position], symbols: &[String]) -> QuoteBatch {
        let tasks = symbols.iter().map(|symbol| self.quote_for(positions, symbol));
        let results = join_all(tasks).await;

        let simulated_count = results
            .iter()
            .filter(|(_, source)| *source == QuoteSource::Simulated)
            .count();
        let quotes: Vec<Quote> = results.into_iter().map(|(quote, _)| quote).collect();

        let mut batch = QuoteBatch {
            quotes,
            simulated_count,
            advisory: None,
        };
        if batch.is_fully_simulated() {
            warn!(
                symbols = batch.quotes.len(),
                "entire refresh batch fell back to simulated quotes"
            );
            batch.advisory = Some(SIMULATED_DATA_ADVISORY.to_string());
        } else {
            info!(
                symbols = batch.quotes.len(),
                simulated = batch.simulated_count,
                "refresh batch complete"
            );
        }
        batch
    }

    /// Resolve a single symbol: try each provider in order, then synthesize.
    async fn quote_for(&self, positions: &[Position], symbol: &str) -> (Quote, QuoteSource) {
        for provider in self.registry.providers() {
            match provider.get_quote(symbol).await {
                Ok(quote) if quote.price.is_finite() && quote.price >= 0.0 => {
                    return (quote, QuoteSource::Live);
                }
                Ok(quote) => {
                    warn!(
                        provider = provider.name(),
                        symbol,
                        price = quote.price,
                        "provider returned an invalid price, trying next source"
                    );
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        symbol,
                        error = %e,
                        "quote fetch failed, trying next source"
                    );
                }
            }
        }

        let baseline = last_known_price(positions, symbol);
        let quote = synthesize_quote(symbol, baseline, &mut rand::thread_rng());
        (quote, QuoteSource::Simulated)
    }
}

/// Last known price of the first position matching `symbol`, if any.
fn last_known_price(positions: &[Position], symbol: &str) -> Option<f64> {
    positions
        .iter()
        .find(|p| p.symbol == symbol)
        .map(|p| p.current_price)
}

/// Synthesize a quote from the last known price.
///
/// Applies a uniformly distributed perturbation in [−2.5%, +2.5%] to the
/// baseline (or to 100 when the symbol has no matching position). Price
/// and absolute change are rounded to two decimals; the change-percent is
/// the raw perturbation fraction × 100.
pub fn synthesize_quote(symbol: &str, baseline: Option<f64>, rng: &mut impl Rng) -> Quote {
    let base = baseline.unwrap_or(FALLBACK_BASELINE_PRICE);
    let volatility = (rng.gen::<f64>() - 0.5) * SYNTHETIC_VOLATILITY;
    let new_price = base * (1.0 + volatility);

    Quote {
        symbol: symbol.to_string(),
        price: round2(new_price),
        change: round2(new_price - base),
        change_percent: volatility * 100.0,
    }
}
