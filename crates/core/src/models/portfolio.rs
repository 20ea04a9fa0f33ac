use serde::{Deserialize, Serialize};

use super::position::Position;
use super::settings::Settings;

/// The main data container: the position list plus user settings.
///
/// Lives entirely in memory — nothing is persisted. The position list is
/// the only shared mutable state in the library; every mutation replaces
/// it wholesale rather than editing elements in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Tracked holdings, in insertion order. Duplicate symbols are allowed
    /// and each forms an independent record.
    pub positions: Vec<Position>,

    /// User settings (quote API keys, auto-refresh period).
    pub settings: Settings,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            settings: Settings::default(),
        }
    }
}
