use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Industry sector of a position.
/// Fixed set — matches the sector dropdown of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    Finance,
    #[serde(rename = "Consumer Discretionary")]
    ConsumerDiscretionary,
    Energy,
    Utilities,
}

impl Sector {
    /// All sectors, in the order the entry form lists them.
    pub const ALL: [Sector; 6] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Finance,
        Sector::ConsumerDiscretionary,
        Sector::Energy,
        Sector::Utilities,
    ];
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sector::Technology => write!(f, "Technology"),
            Sector::Healthcare => write!(f, "Healthcare"),
            Sector::Finance => write!(f, "Finance"),
            Sector::ConsumerDiscretionary => write!(f, "Consumer Discretionary"),
            Sector::Energy => write!(f, "Energy"),
            Sector::Utilities => write!(f, "Utilities"),
        }
    }
}

impl Default for Sector {
    /// The entry form pre-selects Technology.
    fn default() -> Self {
        Sector::Technology
    }
}

/// A single tracked holding.
///
/// **Mutability contract**: only `current_price`, `change`, `change_percent`
/// and `last_updated` ever change after creation, and only as a batch when
/// a quote is merged in. Everything else is fixed for the record's lifetime,
/// and `id` is never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Unique handle, derived from the creation-time clock (Unix millis),
    /// strictly increasing across the portfolio's lifetime.
    pub id: u64,

    /// Ticker symbol, uppercased on entry (e.g., "AAPL").
    /// Not validated against any registry; duplicates are allowed.
    pub symbol: String,

    /// Display label; falls back to `symbol` when the form leaves it empty.
    pub name: String,

    /// Share count (non-negative, fractional shares allowed).
    pub shares: f64,

    /// Cost basis per share.
    pub avg_price: f64,

    /// Latest known market price. Starts at `avg_price` unless supplied.
    pub current_price: f64,

    pub sector: Sector,

    /// Timestamp of the last price mutation.
    pub last_updated: DateTime<Utc>,

    /// Last observed absolute price delta; zero until a refresh occurs.
    #[serde(default)]
    pub change: f64,

    /// Last observed relative price delta in percent; zero until a refresh.
    #[serde(default)]
    pub change_percent: f64,
}

/// Raw entry-form input for a new position. All numeric fields arrive as
/// strings, exactly as typed; parsing and defaulting happen in
/// [`Position::from_draft`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionDraft {
    pub symbol: String,
    pub name: String,
    pub shares: String,
    pub avg_price: String,
    pub current_price: String,
    pub sector: Sector,
}

impl PositionDraft {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        shares: impl Into<String>,
        avg_price: impl Into<String>,
        current_price: impl Into<String>,
        sector: Sector,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            shares: shares.into(),
            avg_price: avg_price.into(),
            current_price: current_price.into(),
            sector,
        }
    }
}

impl Position {
    /// Build a position from an entry-form draft.
    ///
    /// Returns `None` when the draft is malformed — empty symbol, empty or
    /// unparsable share count, empty or unparsable average price, negative
    /// shares, or a non-positive cost basis. The caller treats `None` as a
    /// silent no-op; no error is surfaced for bad form input.
    ///
    /// Defaulting rules:
    /// - `name` empty → `symbol`
    /// - `current_price` empty or unparsable → `avg_price`
    pub fn from_draft(draft: &PositionDraft, id: u64, now: DateTime<Utc>) -> Option<Self> {
        let symbol = draft.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return None;
        }

        let shares: f64 = draft.shares.trim().parse().ok()?;
        if !shares.is_finite() || shares < 0.0 {
            return None;
        }

        let avg_price: f64 = draft.avg_price.trim().parse().ok()?;
        if !avg_price.is_finite() || avg_price <= 0.0 {
            return None;
        }

        let current_price = draft
            .current_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .unwrap_or(avg_price);

        let name = if draft.name.trim().is_empty() {
            symbol.clone()
        } else {
            draft.name.trim().to_string()
        };

        Some(Self {
            id,
            symbol,
            name,
            shares,
            avg_price,
            current_price,
            sector: draft.sector,
            last_updated: now,
            change: 0.0,
            change_percent: 0.0,
        })
    }
}
