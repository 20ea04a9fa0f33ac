use serde::{Deserialize, Serialize};

use super::position::Sector;

/// Valuation snapshot of the entire portfolio.
///
/// Re-derived from the position list on every read — there is no caching
/// and no incremental update, so the summary can never go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of `shares × avg_price` over all positions.
    pub total_invested: f64,

    /// Sum of `shares × current_price` over all positions.
    pub current_value: f64,

    /// `current_value − total_invested`.
    pub total_gain_loss: f64,

    /// `(total_gain_loss / total_invested) × 100`, or 0.0 when nothing
    /// is invested.
    pub total_gain_loss_percent: f64,

    /// Per-position breakdown, in portfolio insertion order.
    pub positions: Vec<PositionSummary>,

    /// Value-weighted sector breakdown, largest slice first.
    /// Covers exactly the sectors present — empty sectors are omitted.
    pub sector_breakdown: Vec<SectorSlice>,
}

/// Valuation of a single position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSummary {
    pub id: u64,
    pub symbol: String,
    pub name: String,
    pub sector: Sector,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,

    /// `shares × current_price`.
    pub market_value: f64,

    /// `(current_price − avg_price) × shares`.
    pub gain_loss: f64,

    /// `(current_price − avg_price) / avg_price × 100`, or 0.0 when the
    /// cost basis is 0.
    pub gain_loss_percent: f64,

    /// This position's share of the portfolio value, in percent.
    pub allocation_percent: f64,
}

/// One slice of the sector breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSlice {
    pub sector: Sector,

    /// Summed `shares × current_price` of the sector's positions.
    pub value: f64,
}
