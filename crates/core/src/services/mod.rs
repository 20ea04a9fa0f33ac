pub mod calculator_service;
pub mod forecast_service;
pub mod portfolio_service;
pub mod quote_service;
pub mod valuation_service;
#[cfg(not(target_arch = "wasm32"))]
pub mod refresh_scheduler;
