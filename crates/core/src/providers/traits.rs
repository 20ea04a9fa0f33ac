use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::Quote;

/// Trait abstraction for live quote sources.
///
/// Each external API implements this trait. If an API stops working or
/// changes shape, only that one implementation is replaced — the refresh
/// pipeline and its synthetic fallback are untouched.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the latest quote for a symbol: current price, absolute change,
    /// and percent change.
    ///
    /// Any failure — network, malformed body, missing field — is an error;
    /// the caller decides whether to fall back to another provider or to
    /// synthetic data.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, CoreError>;
}
