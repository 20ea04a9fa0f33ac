use std::collections::HashMap;

use crate::models::analytics::{PortfolioSummary, PositionSummary, SectorSlice};
use crate::models::position::{Position, Sector};

/// Computes portfolio valuation: totals, per-position gain/loss, and the
/// value-weighted sector breakdown.
///
/// Pure business logic — no I/O, no state. Every call re-derives the whole
/// summary from the position slice; there is no caching and no incremental
/// update, so the result can never go stale.
///
/// Division policy: every percentage with a zero denominator (nothing
/// invested, zero cost basis, zero portfolio value) is reported as `0.0`
/// so the summary stays finite and serializable.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a full valuation summary for the given positions.
    ///
    /// Never fails: the empty list yields all-zero totals and an empty
    /// breakdown.
    pub fn portfolio_summary(&self, positions: &[Position]) -> PortfolioSummary {
        let total_invested: f64 = positions.iter().map(|p| p.shares * p.avg_price).sum();
        let current_value: f64 = positions.iter().map(|p| p.shares * p.current_price).sum();
        let total_gain_loss = current_value - total_invested;
        let total_gain_loss_percent = if total_invested > 0.0 {
            (total_gain_loss / total_invested) * 100.0
        } else {
            0.0
        };

        let position_summaries = positions
            .iter()
            .map(|p| {
                let market_value = p.shares * p.current_price;
                let gain_loss = (p.current_price - p.avg_price) * p.shares;
                let gain_loss_percent = if p.avg_price > 0.0 {
                    ((p.current_price - p.avg_price) / p.avg_price) * 100.0
                } else {
                    0.0
                };
                let allocation_percent = if current_value > 0.0 {
                    (market_value / current_value) * 100.0
                } else {
                    0.0
                };

                PositionSummary {
                    id: p.id,
                    symbol: p.symbol.clone(),
                    name: p.name.clone(),
                    sector: p.sector,
                    shares: p.shares,
                    avg_price: p.avg_price,
                    current_price: p.current_price,
                    market_value,
                    gain_loss,
                    gain_loss_percent,
                    allocation_percent,
                }
            })
            .collect();

        PortfolioSummary {
            total_invested,
            current_value,
            total_gain_loss,
            total_gain_loss_percent,
            positions: position_summaries,
            sector_breakdown: self.sector_breakdown(positions),
        }
    }

    /// Group positions by sector, summing `shares × current_price` per group.
    ///
    /// Covers exactly the sectors present in the position list — sectors
    /// with no positions are omitted, not zero-filled. Slices are sorted
    /// largest value first for deterministic output.
    pub fn sector_breakdown(&self, positions: &[Position]) -> Vec<SectorSlice> {
        let mut by_sector: HashMap<Sector, f64> = HashMap::new();
        for position in positions {
            *by_sector.entry(position.sector).or_insert(0.0) += position.shares * position.current_price;
        }

        let mut slices: Vec<SectorSlice> = by_sector
            .into_iter()
            .map(|(sector, value)| SectorSlice { sector, value })
            .collect();
        slices.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        slices
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
