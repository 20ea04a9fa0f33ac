// ═══════════════════════════════════════════════════════════════════
// Provider Tests — Registry wiring and fallback order
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use std::collections::HashMap;

use trade_tracker_core::errors::CoreError;
use trade_tracker_core::models::quote::Quote;
use trade_tracker_core::providers::alphavantage::AlphaVantageProvider;
use trade_tracker_core::providers::registry::QuoteProviderRegistry;
use trade_tracker_core::providers::traits::QuoteProvider;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Provider
// ═══════════════════════════════════════════════════════════════════

/// A named mock returning a fixed price for every symbol.
struct MockProvider {
    name: String,
    price: f64,
}

impl MockProvider {
    fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

#[async_trait]
impl QuoteProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        Ok(Quote {
            symbol: symbol.to_uppercase(),
            price: self.price,
            change: 0.0,
            change_percent: 0.0,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════

#[test]
fn empty_registry_has_no_providers() {
    let registry = QuoteProviderRegistry::new();
    assert!(!registry.has_providers());
    assert!(registry.providers().is_empty());
    assert!(registry.provider_names().is_empty());
}

#[test]
fn defaults_without_a_key_register_nothing() {
    let registry = QuoteProviderRegistry::new_with_defaults(&HashMap::new());
    assert!(!registry.has_providers());
}

#[test]
fn defaults_with_an_alphavantage_key_register_the_provider() {
    let mut api_keys = HashMap::new();
    api_keys.insert("alphavantage".to_string(), "demo".to_string());

    let registry = QuoteProviderRegistry::new_with_defaults(&api_keys);
    assert!(registry.has_providers());
    assert_eq!(registry.provider_names(), vec!["Alpha Vantage"]);
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut api_keys = HashMap::new();
    api_keys.insert("someother".to_string(), "key".to_string());

    let registry = QuoteProviderRegistry::new_with_defaults(&api_keys);
    assert!(!registry.has_providers());
}

#[test]
fn registration_order_is_fallback_order() {
    let mut registry = QuoteProviderRegistry::new();
    registry.register(Box::new(MockProvider::new("Primary", 1.0)));
    registry.register(Box::new(MockProvider::new("Secondary", 2.0)));

    assert_eq!(registry.provider_names(), vec!["Primary", "Secondary"]);
    assert_eq!(registry.providers()[0].name(), "Primary");
}

#[tokio::test]
async fn registered_providers_serve_quotes_as_trait_objects() {
    let mut registry = QuoteProviderRegistry::new();
    registry.register(Box::new(MockProvider::new("Mock", 42.5)));

    let quote = registry.providers()[0].get_quote("aapl").await.unwrap();
    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, 42.5);
}

// ═══════════════════════════════════════════════════════════════════
// Alpha Vantage
// ═══════════════════════════════════════════════════════════════════

#[test]
fn alphavantage_reports_its_name() {
    let provider = AlphaVantageProvider::new("demo".to_string());
    assert_eq!(provider.name(), "Alpha Vantage");
}
