use crate::utils::table::Tabular;
use sqlx::FromRow;
use sqlx::types::chrono::{DateTime, Utc};

/// Earliest and latest traded price per symbol, ordered by tick time
#[derive(Debug, Clone, FromRow)]
pub struct FirstLastPrice {
    pub symbol: String,
    pub first_price: f64,
    pub last_price: f64,
}

/// Average price per (1-day bucket, symbol)
#[derive(Debug, Clone, FromRow)]
pub struct BucketAveragePrice {
    pub bucket: DateTime<Utc>,
    pub symbol: String,
    pub avg_price: f64,
}

/// Daily OHLC candlestick per symbol. Open and close follow tick time,
/// not insertion order.
#[derive(Debug, Clone, FromRow)]
pub struct DailyCandlestick {
    pub day: DateTime<Utc>,
    pub symbol: String,
    pub high: f64,
    pub open: f64,
    pub close: f64,
    pub low: f64,
}

impl Tabular for FirstLastPrice {
    fn headers() -> &'static [&'static str] {
        &["symbol", "first", "last"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.symbol.clone(),
            self.first_price.to_string(),
            self.last_price.to_string(),
        ]
    }
}

impl Tabular for BucketAveragePrice {
    fn headers() -> &'static [&'static str] {
        &["bucket", "symbol", "avg"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.bucket.format("%Y-%m-%d").to_string(),
            self.symbol.clone(),
            self.avg_price.to_string(),
        ]
    }
}

impl Tabular for DailyCandlestick {
    fn headers() -> &'static [&'static str] {
        &["day", "symbol", "high", "open", "close", "low"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.day.format("%Y-%m-%d").to_string(),
            self.symbol.clone(),
            self.high.to_string(),
            self.open.to_string(),
            self.close.to_string(),
            self.low.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_candlestick_row_matches_headers() {
        let candle = DailyCandlestick {
            day: Utc.with_ymd_and_hms(2026, 8, 24, 0, 0, 0).unwrap(),
            symbol: "AAPL".to_string(),
            high: 152.0,
            open: 150.0,
            close: 151.5,
            low: 149.0,
        };

        let row = candle.row();
        assert_eq!(row.len(), DailyCandlestick::headers().len());
        assert_eq!(row[0], "2026-08-24");
        assert_eq!(row[2], "152");
        assert_eq!(row[5], "149");
    }

    #[test]
    fn test_bucket_average_row_formats_day_only() {
        let avg = BucketAveragePrice {
            bucket: Utc.with_ymd_and_hms(2026, 8, 24, 0, 0, 0).unwrap(),
            symbol: "TSLA".to_string(),
            avg_price: 245.75,
        };

        assert_eq!(avg.row(), vec!["2026-08-24", "TSLA", "245.75"]);
    }
}
