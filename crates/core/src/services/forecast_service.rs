use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::forecast::{ForecastPoint, ForecastSegment};

/// Days of synthetic history before day 0.
pub const HISTORY_DAYS: i64 = 30;

/// Days of projection after day 0.
pub const FORECAST_DAYS: i64 = 30;

/// Total series length: 31 historical points (day −30 through day 0)
/// followed by 30 forecast points (day 1 through day 30).
pub const SERIES_LEN: usize = (HISTORY_DAYS + 1 + FORECAST_DAYS) as usize;

/// Baseline used when the selected symbol resolves to no position.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

/// Fixed daily drift applied to every forecast step: +0.1%.
const DAILY_DRIFT: f64 = 0.001;

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Generates the 61-point historical/forecast chart series.
///
/// This is explicitly a non-predictive random walk for charting, not a
/// statistical model: the "history" is the baseline perturbed by noise
/// that grows with distance from day 0, and the "forecast" compounds a
/// fixed drift plus fresh noise step by step. Any numeric baseline is
/// accepted, including non-positive ones, and simply propagated through
/// the arithmetic.
pub struct ForecastService;

impl ForecastService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a full series from scratch.
    ///
    /// - Historical, offsets −30..=0: uniform noise in [−0.05, +0.05]
    ///   scaled by `|offset| × 0.01`, applied multiplicatively to the
    ///   baseline. The day-0 point equals the baseline exactly.
    /// - Forecast, offsets 1..=30: previous point's value × (1 + 0.001 +
    ///   uniform noise in [−0.04, +0.04]).
    ///
    /// All values are rounded to two decimals; each forecast step
    /// compounds on the previous rounded value. The generator is injected
    /// so callers can seed it for reproducible series.
    pub fn generate_series(
        &self,
        base_price: f64,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> Vec<ForecastPoint> {
        let mut points: Vec<ForecastPoint> = Vec::with_capacity(SERIES_LEN);

        for offset in -HISTORY_DAYS..=0 {
            let volatility = rng.gen::<f64>() * 0.1 - 0.05;
            let price = base_price * (1.0 + volatility * offset.abs() as f64 * 0.01);
            points.push(ForecastPoint {
                date: today + Duration::days(offset),
                actual: Some(round2(price)),
                forecast: None,
                segment: ForecastSegment::Historical,
            });
        }

        // Walk forward from the historical tail, compounding each step.
        let mut prev = points
            .last()
            .map(|p| p.value())
            .unwrap_or(base_price);
        for offset in 1..=FORECAST_DAYS {
            let volatility = rng.gen::<f64>() * 0.08 - 0.04;
            let value = round2(prev * (1.0 + DAILY_DRIFT + volatility));
            points.push(ForecastPoint {
                date: today + Duration::days(offset),
                actual: None,
                forecast: Some(value),
                segment: ForecastSegment::Forecast,
            });
            prev = value;
        }

        points
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new()
    }
}
