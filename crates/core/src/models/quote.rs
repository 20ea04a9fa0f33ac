use serde::{Deserialize, Serialize};

/// A transient price observation for one symbol.
///
/// Produced by a refresh attempt — either fetched live from the quote API
/// or synthesized from the last known price. Never stored; it exists only
/// to be merged into the matching position(s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol this quote belongs to.
    pub symbol: String,

    /// Latest price, rounded to two decimals on the synthetic path.
    pub price: f64,

    /// Absolute price change against the previous known price.
    pub change: f64,

    /// Relative price change in percent.
    pub change_percent: f64,
}

/// Where a quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteSource {
    /// Fetched from the external quote API.
    Live,
    /// Synthesized from the last known price after a fetch failure.
    Simulated,
}

/// Result of one refresh batch: exactly one quote per requested symbol,
/// regardless of how many fetches succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBatch {
    pub quotes: Vec<Quote>,

    /// How many of the quotes were synthesized rather than fetched.
    pub simulated_count: usize,

    /// User-visible advisory, set when the whole batch fell back to
    /// simulated data. Cleared by the next refresh attempt.
    pub advisory: Option<String>,
}

impl QuoteBatch {
    /// True when every quote in the batch was synthesized.
    pub fn is_fully_simulated(&self) -> bool {
        self.simulated_count == self.quotes.len() && !self.quotes.is_empty()
    }
}
