use crate::utils::table::Tabular;
use sqlx::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

/// One raw observation in the stocks_real_time hypertable
#[derive(Debug, Clone, FromRow)]
pub struct StockTick {
    /// Observation timestamp, timezone-aware
    pub time: DateTime<Utc>,

    /// Ticker symbol, conceptually references company.symbol
    pub symbol: String,

    /// Traded price at this tick
    pub price: f64,

    /// Cumulative volume for the trading day, when the feed provides it
    pub day_volume: Option<i32>,
}

impl Tabular for StockTick {
    fn headers() -> &'static [&'static str] {
        &["time", "symbol", "price", "day_volume"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.time.to_rfc3339(),
            self.symbol.clone(),
            self.price.to_string(),
            self.day_volume.map(|v| v.to_string()).unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_row_renders_missing_volume_as_empty() {
        let tick = StockTick {
            time: Utc.with_ymd_and_hms(2026, 8, 25, 14, 30, 0).unwrap(),
            symbol: "AAPL".to_string(),
            price: 150.25,
            day_volume: None,
        };

        let row = tick.row();
        assert_eq!(row.len(), StockTick::headers().len());
        assert_eq!(row[1], "AAPL");
        assert_eq!(row[2], "150.25");
        assert_eq!(row[3], "");
    }

    #[test]
    fn test_row_renders_volume_when_present() {
        let tick = StockTick {
            time: Utc.with_ymd_and_hms(2026, 8, 25, 14, 30, 0).unwrap(),
            symbol: "MSFT".to_string(),
            price: 410.0,
            day_volume: Some(123456),
        };

        assert_eq!(tick.row()[3], "123456");
    }
}
