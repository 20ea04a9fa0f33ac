pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

use errors::CoreError;
use models::{
    analytics::{PortfolioSummary, SectorSlice},
    calculator::{PositionSizeResult, RoiResult},
    forecast::ForecastPoint,
    portfolio::Portfolio,
    position::{Position, PositionDraft, Sector},
    settings::Settings,
};
use providers::registry::QuoteProviderRegistry;
use services::{
    calculator_service::CalculatorService, forecast_service::DEFAULT_BASE_PRICE,
    forecast_service::ForecastService, portfolio_service::PortfolioService,
    quote_service::QuoteService, valuation_service::ValuationService,
};

#[cfg(not(target_arch = "wasm32"))]
pub use services::refresh_scheduler::{RefreshScheduler, SharedTradeTracker};

/// Main entry point for the TradeTracker core library.
///
/// Holds the portfolio state and all services needed to operate on it.
/// The presentation layer owns one of these, binds its views to the
/// summary/forecast getters, and routes every user action through a
/// method here — the library computes, the frontend renders.
#[must_use]
pub struct TradeTracker {
    portfolio: Portfolio,
    portfolio_service: PortfolioService,
    valuation_service: ValuationService,
    quote_service: QuoteService,
    forecast_service: ForecastService,
    calculator_service: CalculatorService,

    /// Symbol feeding the forecast chart.
    selected_symbol: Option<String>,

    /// True for the duration of a refresh batch.
    refreshing: bool,

    /// Advisory from the last refresh, set while running on simulated
    /// data, replaced on every attempt.
    advisory: Option<String>,

    /// Completion time of the last quote merge.
    last_update: Option<DateTime<Utc>>,

    /// Highest position id handed out so far. Ids come from the creation
    /// clock but are bumped past this watermark, so they never repeat.
    id_watermark: u64,
}

impl std::fmt::Debug for TradeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeTracker")
            .field("positions", &self.portfolio.positions.len())
            .field("selected_symbol", &self.selected_symbol)
            .field("refreshing", &self.refreshing)
            .field("advisory", &self.advisory)
            .field("last_update", &self.last_update)
            .finish()
    }
}

impl TradeTracker {
    /// Create a tracker with an empty portfolio and default settings.
    pub fn create_new() -> Self {
        Self::build(Portfolio::default())
    }

    /// Create a tracker seeded with the demo holdings the dashboard ships
    /// with (AAPL, MSFT, AMZN), AAPL pre-selected for the forecast chart.
    pub fn with_sample_positions() -> Self {
        let mut tracker = Self::create_new();
        let samples = [
            PositionDraft::new("AAPL", "Apple Inc.", "10", "150", "175", Sector::Technology),
            PositionDraft::new("MSFT", "Microsoft", "5", "300", "320", Sector::Technology),
            PositionDraft::new(
                "AMZN",
                "Amazon",
                "3",
                "3200",
                "3400",
                Sector::ConsumerDiscretionary,
            ),
        ];
        for draft in &samples {
            let _ = tracker.add_position(draft);
        }
        tracker.selected_symbol = Some("AAPL".to_string());
        tracker
    }

    // ── Positions ───────────────────────────────────────────────────

    /// Add a position from the entry form.
    ///
    /// Returns the new position's id, or `None` — with the list left
    /// untouched — when the draft is malformed (empty symbol, share
    /// count, or average price). Bad form input is a silent no-op.
    pub fn add_position(&mut self, draft: &PositionDraft) -> Option<u64> {
        let id = self.next_id();
        self.portfolio_service
            .add_position(&mut self.portfolio, draft, id, Utc::now())
    }

    /// All tracked positions, in insertion order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.portfolio.positions
    }

    #[must_use]
    pub fn position_count(&self) -> usize {
        self.portfolio.positions.len()
    }

    /// Unique symbols across the portfolio, in insertion order.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        self.portfolio_service.symbols(&self.portfolio)
    }

    // ── Valuation ───────────────────────────────────────────────────

    /// Full valuation summary, re-derived from the current position list.
    #[must_use]
    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.valuation_service
            .portfolio_summary(&self.portfolio.positions)
    }

    /// Value-weighted sector breakdown, largest slice first.
    #[must_use]
    pub fn sector_breakdown(&self) -> Vec<SectorSlice> {
        self.valuation_service
            .sector_breakdown(&self.portfolio.positions)
    }

    // ── Quote Refresh ───────────────────────────────────────────────

    /// Run one refresh batch: fetch a quote per held symbol (live where
    /// possible, simulated otherwise) and merge the results into the
    /// position list.
    ///
    /// Never fails: no fetch failure propagates past the quote service.
    /// With an empty portfolio this is a no-op.
    pub async fn refresh_prices(&mut self) {
        if self.portfolio.positions.is_empty() {
            return;
        }

        self.refreshing = true;
        self.advisory = None;

        let symbols = self.portfolio_service.symbols(&self.portfolio);
        let batch = self
            .quote_service
            .refresh_quotes(&self.portfolio.positions, &symbols)
            .await;

        let now = Utc::now();
        self.portfolio_service
            .apply_quotes(&mut self.portfolio, &batch.quotes, now);
        self.advisory = batch.advisory;
        self.last_update = Some(now);
        self.refreshing = false;
    }

    /// True while a refresh batch is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Advisory from the last refresh, present while the portfolio runs
    /// on simulated prices.
    #[must_use]
    pub fn last_advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Completion time of the last quote merge.
    #[must_use]
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    // ── Forecast ────────────────────────────────────────────────────

    /// Select the symbol feeding the forecast chart (uppercased).
    /// An empty selection clears it.
    pub fn select_symbol(&mut self, symbol: &str) {
        let normalized = symbol.trim().to_uppercase();
        self.selected_symbol = if normalized.is_empty() {
            None
        } else {
            Some(normalized)
        };
    }

    #[must_use]
    pub fn selected_symbol(&self) -> Option<&str> {
        self.selected_symbol.as_deref()
    }

    /// Generate the 61-point forecast series for the selected symbol,
    /// baselined on its current price (or 100 when nothing resolves).
    #[must_use]
    pub fn forecast_series(&self) -> Vec<ForecastPoint> {
        self.forecast_series_with(&mut rand::thread_rng(), Utc::now().date_naive())
    }

    /// Deterministic variant: caller supplies the generator and "today".
    #[must_use]
    pub fn forecast_series_with(&self, rng: &mut impl Rng, today: NaiveDate) -> Vec<ForecastPoint> {
        let base_price = self
            .selected_symbol
            .as_deref()
            .and_then(|symbol| {
                self.portfolio
                    .positions
                    .iter()
                    .find(|p| p.symbol == symbol)
            })
            .map(|p| p.current_price)
            .unwrap_or(DEFAULT_BASE_PRICE);

        self.forecast_service.generate_series(base_price, today, rng)
    }

    // ── Calculators ─────────────────────────────────────────────────

    /// ROI calculator: absolute gain, total return, annualized return.
    #[must_use]
    pub fn roi(&self, initial_investment: f64, current_value: f64, months: f64) -> RoiResult {
        self.calculator_service
            .roi(initial_investment, current_value, months)
    }

    /// Position-sizing calculator: shares to buy for a given capital,
    /// risk budget, entry, and stop-loss.
    #[must_use]
    pub fn position_size(
        &self,
        capital: f64,
        risk_percent: f64,
        entry_price: f64,
        stop_loss: f64,
    ) -> PositionSizeResult {
        self.calculator_service
            .position_size(capital, risk_percent, entry_price, stop_loss)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.portfolio.settings
    }

    /// Set an API key for a quote provider (e.g., "alphavantage").
    /// Rebuilds the provider registry so the new key takes effect
    /// immediately.
    pub fn set_api_key(&mut self, provider: String, key: String) {
        self.portfolio.settings.api_keys.insert(provider, key);
        self.rebuild_quote_service();
    }

    /// Remove an API key for a quote provider.
    /// Rebuilds the provider registry so the removal takes effect
    /// immediately.
    pub fn remove_api_key(&mut self, provider: &str) -> bool {
        let removed = self.portfolio.settings.api_keys.remove(provider).is_some();
        if removed {
            self.rebuild_quote_service();
        }
        removed
    }

    /// Set the auto-refresh period in seconds. Must be non-zero.
    pub fn set_refresh_interval_secs(&mut self, secs: u64) -> Result<(), CoreError> {
        if secs == 0 {
            return Err(CoreError::Validation(
                "Refresh interval must be at least 1 second".into(),
            ));
        }
        self.portfolio.settings.refresh_interval_secs = secs;
        Ok(())
    }

    /// The configured auto-refresh period.
    #[must_use]
    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.portfolio.settings.refresh_interval_secs)
    }

    /// True when at least one live quote source is configured; without
    /// one, every refresh runs on simulated data.
    #[must_use]
    pub fn has_live_source(&self) -> bool {
        self.quote_service.has_live_source()
    }

    /// Names of the configured quote providers, in fallback order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.quote_service.provider_names()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio) -> Self {
        let registry = QuoteProviderRegistry::new_with_defaults(&portfolio.settings.api_keys);
        Self {
            portfolio,
            portfolio_service: PortfolioService::new(),
            valuation_service: ValuationService::new(),
            quote_service: QuoteService::new(registry),
            forecast_service: ForecastService::new(),
            calculator_service: CalculatorService::new(),
            selected_symbol: None,
            refreshing: false,
            advisory: None,
            last_update: None,
            id_watermark: 0,
        }
    }

    fn rebuild_quote_service(&mut self) {
        let registry = QuoteProviderRegistry::new_with_defaults(&self.portfolio.settings.api_keys);
        self.quote_service = QuoteService::new(registry);
    }

    /// Next position id: creation-clock millis, bumped past the watermark
    /// so ids are strictly increasing and never reused.
    fn next_id(&mut self) -> u64 {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        self.id_watermark = now_ms.max(self.id_watermark + 1);
        self.id_watermark
    }
}
