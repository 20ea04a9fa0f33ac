use serde::{Deserialize, Serialize};

/// Result of the ROI calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// `current_value − initial_investment`.
    pub gain: f64,

    /// Total return in percent, or 0.0 when nothing was invested.
    pub roi_percent: f64,

    /// Return compounded to a yearly rate, or 0.0 when the holding
    /// period or either amount makes it undefined.
    pub annualized_roi_percent: f64,
}

/// Result of the position-sizing (risk) calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizeResult {
    /// Capital put at risk: `capital × risk_percent / 100`.
    pub risk_amount: f64,

    /// Loss per share if the stop is hit: `entry_price − stop_loss`.
    pub per_share_risk: f64,

    /// Whole shares to buy so the stop-out loses at most `risk_amount`.
    pub shares: f64,

    /// Cost of the sized position: `shares × entry_price`.
    pub position_value: f64,
}
