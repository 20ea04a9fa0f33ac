use chrono::{DateTime, Utc};

use crate::models::portfolio::Portfolio;
use crate::models::position::{Position, PositionDraft};
use crate::models::quote::Quote;

/// Manages the position list: entry-form additions and quote merges.
///
/// Every mutation replaces the list wholesale (copy-on-write) rather than
/// editing elements in place, so readers holding a clone never observe a
/// half-applied update.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add a position from an entry-form draft.
    ///
    /// A malformed draft (empty symbol, share count, or average price) is
    /// a silent no-op: the list is left untouched and `None` is returned.
    /// No error is surfaced for bad form input.
    pub fn add_position(
        &self,
        portfolio: &mut Portfolio,
        draft: &PositionDraft,
        id: u64,
        now: DateTime<Utc>,
    ) -> Option<u64> {
        let position = Position::from_draft(draft, id, now)?;

        let mut positions = portfolio.positions.clone();
        positions.push(position);
        portfolio.positions = positions;
        Some(id)
    }

    /// Unique symbols across the position list, in insertion order.
    /// Duplicate positions on the same symbol contribute one entry.
    pub fn symbols(&self, portfolio: &Portfolio) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::new();
        for position in &portfolio.positions {
            if !symbols.iter().any(|s| s == &position.symbol) {
                symbols.push(position.symbol.clone());
            }
        }
        symbols
    }

    /// Merge a quote batch into the position list.
    ///
    /// Every position whose symbol matches a quote gets `current_price`,
    /// `change` and `change_percent` overwritten as a batch and
    /// `last_updated` stamped with the merge time. Positions with no
    /// matching quote are left unchanged. Returns the number of positions
    /// updated.
    pub fn apply_quotes(
        &self,
        portfolio: &mut Portfolio,
        quotes: &[Quote],
        now: DateTime<Utc>,
    ) -> usize {
        let mut updated = 0;

        let positions: Vec<Position> = portfolio
            .positions
            .iter()
            .map(|position| {
                match quotes.iter().find(|q| q.symbol == position.symbol) {
                    Some(quote) => {
                        updated += 1;
                        Position {
                            current_price: quote.price,
                            change: quote.change,
                            change_percent: quote.change_percent,
                            last_updated: now,
                            ..position.clone()
                        }
                    }
                    None => position.clone(),
                }
            })
            .collect();

        portfolio.positions = positions;
        updated
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
