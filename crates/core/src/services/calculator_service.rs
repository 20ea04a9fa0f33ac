use crate::models::calculator::{PositionSizeResult, RoiResult};

/// The two stand-alone calculators of the dashboard's calculator view.
///
/// Pure arithmetic over caller-supplied numbers — nothing here reads the
/// position list. Zero denominators follow the same policy as the
/// valuator: the affected percentage is reported as 0.0.
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Return on investment over a holding period.
    ///
    /// `months` is the holding period; the annualized figure compounds the
    /// total return to a yearly rate and is 0.0 unless both amounts and
    /// the period are positive.
    pub fn roi(&self, initial_investment: f64, current_value: f64, months: f64) -> RoiResult {
        let gain = current_value - initial_investment;
        let roi_percent = if initial_investment > 0.0 {
            (gain / initial_investment) * 100.0
        } else {
            0.0
        };
        let annualized_roi_percent =
            if initial_investment > 0.0 && current_value > 0.0 && months > 0.0 {
                ((current_value / initial_investment).powf(12.0 / months) - 1.0) * 100.0
            } else {
                0.0
            };

        RoiResult {
            gain,
            roi_percent,
            annualized_roi_percent,
        }
    }

    /// Fixed-fractional position sizing from a stop-loss distance.
    ///
    /// Shares are floored to whole units; when the stop sits at or above
    /// the entry price there is no defined risk per share and the size is
    /// zero.
    pub fn position_size(
        &self,
        capital: f64,
        risk_percent: f64,
        entry_price: f64,
        stop_loss: f64,
    ) -> PositionSizeResult {
        let risk_amount = capital * risk_percent / 100.0;
        let per_share_risk = entry_price - stop_loss;
        let shares = if per_share_risk > 0.0 && risk_amount > 0.0 {
            (risk_amount / per_share_risk).floor()
        } else {
            0.0
        };

        PositionSizeResult {
            risk_amount,
            per_share_risk,
            shares,
            position_value: shares * entry_price,
        }
    }
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new()
    }
}
