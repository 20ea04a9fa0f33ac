use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default auto-refresh period in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// User-configurable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Optional API keys for quote providers that require them.
    /// Keys: provider name (e.g., "alphavantage").
    /// Values: the API key string.
    pub api_keys: HashMap<String, String>,

    /// Period of the auto-refresh timer, in seconds.
    pub refresh_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_keys: HashMap::new(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}
