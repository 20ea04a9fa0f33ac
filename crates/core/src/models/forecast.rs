use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which half of the chart a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastSegment {
    #[serde(rename = "historical")]
    Historical,
    #[serde(rename = "forecast")]
    Forecast,
}

impl std::fmt::Display for ForecastSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastSegment::Historical => write!(f, "historical"),
            ForecastSegment::Forecast => write!(f, "forecast"),
        }
    }
}

/// A single point of the 61-point price chart series.
///
/// Exactly one of `actual` / `forecast` is populated, keyed off `segment` —
/// the frontend plots them as two separate lines so the chart breaks at
/// the historical/forecast boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date of this point.
    pub date: NaiveDate,

    /// Price for historical points (day −30 through day 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,

    /// Price for projected points (day 1 through day 30).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<f64>,

    #[serde(rename = "type")]
    pub segment: ForecastSegment,
}

impl ForecastPoint {
    /// The populated price, whichever side of the boundary the point is on.
    pub fn value(&self) -> f64 {
        self.actual.or(self.forecast).unwrap_or(0.0)
    }
}
