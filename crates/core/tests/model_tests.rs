use chrono::{NaiveDate, TimeZone, Utc};
use trade_tracker_core::models::forecast::{ForecastPoint, ForecastSegment};
use trade_tracker_core::models::portfolio::Portfolio;
use trade_tracker_core::models::position::{Position, PositionDraft, Sector};
use trade_tracker_core::models::quote::{Quote, QuoteBatch};
use trade_tracker_core::models::settings::Settings;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn draft(symbol: &str, shares: &str, avg: &str) -> PositionDraft {
    PositionDraft::new(symbol, "", shares, avg, "", Sector::Technology)
}

// ═══════════════════════════════════════════════════════════════════
//  Sector
// ═══════════════════════════════════════════════════════════════════

mod sector {
    use super::*;

    #[test]
    fn display_labels() {
        assert_eq!(Sector::Technology.to_string(), "Technology");
        assert_eq!(Sector::Healthcare.to_string(), "Healthcare");
        assert_eq!(Sector::Finance.to_string(), "Finance");
        assert_eq!(
            Sector::ConsumerDiscretionary.to_string(),
            "Consumer Discretionary"
        );
        assert_eq!(Sector::Energy.to_string(), "Energy");
        assert_eq!(Sector::Utilities.to_string(), "Utilities");
    }

    #[test]
    fn all_lists_six_sectors() {
        assert_eq!(Sector::ALL.len(), 6);
    }

    #[test]
    fn default_is_technology() {
        assert_eq!(Sector::default(), Sector::Technology);
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&Sector::ConsumerDiscretionary).unwrap();
        assert_eq!(json, "\"Consumer Discretionary\"");
        let back: Sector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sector::ConsumerDiscretionary);
    }

    #[test]
    fn serde_roundtrip_all() {
        for sector in Sector::ALL {
            let json = serde_json::to_string(&sector).unwrap();
            let back: Sector = serde_json::from_str(&json).unwrap();
            assert_eq!(sector, back);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Position::from_draft
// ═══════════════════════════════════════════════════════════════════

mod position_draft {
    use super::*;

    #[test]
    fn builds_a_complete_position() {
        let d = PositionDraft::new(
            "AAPL",
            "Apple Inc.",
            "10",
            "150",
            "175",
            Sector::Technology,
        );
        let p = Position::from_draft(&d, 7, now()).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.symbol, "AAPL");
        assert_eq!(p.name, "Apple Inc.");
        assert_eq!(p.shares, 10.0);
        assert_eq!(p.avg_price, 150.0);
        assert_eq!(p.current_price, 175.0);
        assert_eq!(p.sector, Sector::Technology);
        assert_eq!(p.change, 0.0);
        assert_eq!(p.change_percent, 0.0);
        assert_eq!(p.last_updated, now());
    }

    #[test]
    fn symbol_is_uppercased() {
        let p = Position::from_draft(&draft("aapl", "1", "10"), 1, now()).unwrap();
        assert_eq!(p.symbol, "AAPL");
    }

    #[test]
    fn name_defaults_to_symbol() {
        let p = Position::from_draft(&draft("msft", "1", "10"), 1, now()).unwrap();
        assert_eq!(p.name, "MSFT");
    }

    #[test]
    fn current_price_defaults_to_avg_price() {
        let p = Position::from_draft(&draft("AAPL", "2", "150"), 1, now()).unwrap();
        assert_eq!(p.current_price, 150.0);
    }

    #[test]
    fn unparsable_current_price_falls_back_to_avg() {
        let d = PositionDraft::new("AAPL", "", "2", "150", "abc", Sector::Technology);
        let p = Position::from_draft(&d, 1, now()).unwrap();
        assert_eq!(p.current_price, 150.0);
    }

    #[test]
    fn fractional_shares_are_accepted() {
        let p = Position::from_draft(&draft("AAPL", "0.5", "100"), 1, now()).unwrap();
        assert_eq!(p.shares, 0.5);
    }

    #[test]
    fn zero_shares_are_accepted() {
        let p = Position::from_draft(&draft("AAPL", "0", "100"), 1, now()).unwrap();
        assert_eq!(p.shares, 0.0);
    }

    // ── silent no-op cases ────────────────────────────────────────

    #[test]
    fn empty_symbol_is_rejected() {
        assert!(Position::from_draft(&draft("", "1", "10"), 1, now()).is_none());
        assert!(Position::from_draft(&draft("   ", "1", "10"), 1, now()).is_none());
    }

    #[test]
    fn empty_shares_are_rejected() {
        assert!(Position::from_draft(&draft("AAPL", "", "10"), 1, now()).is_none());
    }

    #[test]
    fn unparsable_shares_are_rejected() {
        assert!(Position::from_draft(&draft("AAPL", "ten", "10"), 1, now()).is_none());
    }

    #[test]
    fn negative_shares_are_rejected() {
        assert!(Position::from_draft(&draft("AAPL", "-5", "10"), 1, now()).is_none());
    }

    #[test]
    fn empty_avg_price_is_rejected() {
        assert!(Position::from_draft(&draft("AAPL", "1", ""), 1, now()).is_none());
    }

    #[test]
    fn zero_avg_price_is_rejected() {
        assert!(Position::from_draft(&draft("AAPL", "1", "0"), 1, now()).is_none());
    }

    #[test]
    fn negative_avg_price_is_rejected() {
        assert!(Position::from_draft(&draft("AAPL", "1", "-3"), 1, now()).is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Quote / QuoteBatch
// ═══════════════════════════════════════════════════════════════════

mod quote {
    use super::*;

    fn q(symbol: &str) -> Quote {
        Quote {
            symbol: symbol.into(),
            price: 100.0,
            change: 1.0,
            change_percent: 1.0,
        }
    }

    #[test]
    fn fully_simulated_when_all_quotes_synthetic() {
        let batch = QuoteBatch {
            quotes: vec![q("AAPL"), q("MSFT")],
            simulated_count: 2,
            advisory: None,
        };
        assert!(batch.is_fully_simulated());
    }

    #[test]
    fn not_fully_simulated_with_a_live_quote() {
        let batch = QuoteBatch {
            quotes: vec![q("AAPL"), q("MSFT")],
            simulated_count: 1,
            advisory: None,
        };
        assert!(!batch.is_fully_simulated());
    }

    #[test]
    fn empty_batch_is_not_fully_simulated() {
        let batch = QuoteBatch {
            quotes: vec![],
            simulated_count: 0,
            advisory: None,
        };
        assert!(!batch.is_fully_simulated());
    }

    #[test]
    fn serde_roundtrip() {
        let quote = q("AAPL");
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(quote, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ForecastPoint
// ═══════════════════════════════════════════════════════════════════

mod forecast_point {
    use super::*;

    #[test]
    fn historical_point_serializes_with_type_tag() {
        let point = ForecastPoint {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            actual: Some(175.0),
            forecast: None,
            segment: ForecastSegment::Historical,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"type\":\"historical\""));
        assert!(json.contains("\"actual\":175.0"));
        // the unpopulated side is omitted entirely
        assert!(!json.contains("forecast"));
    }

    #[test]
    fn forecast_point_serializes_with_type_tag() {
        let point = ForecastPoint {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            actual: None,
            forecast: Some(176.5),
            segment: ForecastSegment::Forecast,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"type\":\"forecast\""));
        assert!(!json.contains("actual"));
    }

    #[test]
    fn value_returns_whichever_side_is_populated() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let historical = ForecastPoint {
            date,
            actual: Some(10.0),
            forecast: None,
            segment: ForecastSegment::Historical,
        };
        let forecast = ForecastPoint {
            date,
            actual: None,
            forecast: Some(20.0),
            segment: ForecastSegment::Forecast,
        };
        assert_eq!(historical.value(), 10.0);
        assert_eq!(forecast.value(), 20.0);
    }

    #[test]
    fn segment_display() {
        assert_eq!(ForecastSegment::Historical.to_string(), "historical");
        assert_eq!(ForecastSegment::Forecast.to_string(), "forecast");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio / Settings
// ═══════════════════════════════════════════════════════════════════

mod container {
    use super::*;

    #[test]
    fn portfolio_default_is_empty() {
        let portfolio = Portfolio::default();
        assert!(portfolio.positions.is_empty());
        assert!(portfolio.settings.api_keys.is_empty());
    }

    #[test]
    fn settings_default_interval_is_30s() {
        assert_eq!(Settings::default().refresh_interval_secs, 30);
    }
}
