use crate::db::postgres::connection::PostgresConnection;
use crate::db::postgres::models::candlestick::{
    BucketAveragePrice, DailyCandlestick, FirstLastPrice,
};
use crate::db::postgres::models::stock_tick::StockTick;
use async_trait::async_trait;
use sqlx::Error as SqlxError;
use std::sync::Arc;
use tracing::{debug, error};

pub const SELECT_RECENT_WINDOW: &str = "SELECT time, symbol, price, day_volume
     FROM stocks_real_time
     WHERE time > now() - INTERVAL '3 days'";

pub const SELECT_TOP_TEN_BY_PRICE: &str = "SELECT time, symbol, price, day_volume
     FROM stocks_real_time
     ORDER BY time DESC, price DESC
     LIMIT 10";

pub const SELECT_FIRST_LAST_BY_SYMBOL: &str =
    "SELECT symbol, first(price, time) AS first_price, last(price, time) AS last_price
     FROM stocks_real_time
     WHERE time > now() - INTERVAL '3 days'
     GROUP BY symbol";

pub const SELECT_DAILY_AVERAGE_PRICE: &str =
    "SELECT time_bucket('1 day', time) AS bucket, symbol, avg(price) AS avg_price
     FROM stocks_real_time
     WHERE time > now() - INTERVAL '1 week'
     GROUP BY bucket, symbol
     ORDER BY bucket, symbol";

pub const SELECT_DAILY_CANDLESTICKS: &str = "SELECT
         time_bucket('1 day', time) AS day,
         symbol,
         max(price) AS high,
         first(price, time) AS open,
         last(price, time) AS close,
         min(price) AS low
     FROM stocks_real_time
     GROUP BY day, symbol
     ORDER BY day DESC, symbol";

pub const SELECT_CANDLESTICKS_FROM_VIEW: &str =
    "SELECT day, symbol, high, open, close, low
     FROM stock_candlestick_daily
     ORDER BY day DESC, symbol";

#[async_trait]
pub trait TraitStockTickRepository {
    /// All ticks observed in the last 3 days (strict window)
    async fn recent_window(&self) -> Result<Vec<StockTick>, SqlxError>;

    /// The 10 most recent ticks, price-descending within equal timestamps
    async fn top_ten_by_price(&self) -> Result<Vec<StockTick>, SqlxError>;

    /// Per symbol, the earliest and latest price over the last 3 days,
    /// using time-ordered first()/last() aggregates
    async fn first_last_by_symbol(&self) -> Result<Vec<FirstLastPrice>, SqlxError>;

    /// Average price per (1-day bucket, symbol) over the last week
    async fn daily_average_price(&self) -> Result<Vec<BucketAveragePrice>, SqlxError>;

    /// Ad-hoc daily OHLC candlesticks computed from the base table
    async fn daily_candlesticks(&self) -> Result<Vec<DailyCandlestick>, SqlxError>;

    /// Daily OHLC candlesticks read from the continuous aggregate
    async fn candlesticks_from_view(&self) -> Result<Vec<DailyCandlestick>, SqlxError>;
}

pub struct StructStockTickRepository {
    connection: Arc<PostgresConnection>,
}

impl StructStockTickRepository {
    pub fn new(connection: Arc<PostgresConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TraitStockTickRepository for StructStockTickRepository {
    async fn recent_window(&self) -> Result<Vec<StockTick>, SqlxError> {
        let pool = self.connection.get_pool();

        debug!("Fetching ticks from the last 3 days");

        let result = sqlx::query_as::<_, StockTick>(SELECT_RECENT_WINDOW)
            .fetch_all(pool)
            .await;

        match &result {
            Ok(rows) => debug!("Fetched {} recent ticks", rows.len()),
            Err(e) => error!("Error fetching recent ticks: {}", e),
        }

        result
    }

    async fn top_ten_by_price(&self) -> Result<Vec<StockTick>, SqlxError> {
        let pool = self.connection.get_pool();

        debug!("Fetching top 10 ticks by time and price");

        let result = sqlx::query_as::<_, StockTick>(SELECT_TOP_TEN_BY_PRICE)
            .fetch_all(pool)
            .await;

        match &result {
            Ok(rows) => debug!("Fetched {} top ticks", rows.len()),
            Err(e) => error!("Error fetching top ticks: {}", e),
        }

        result
    }

    async fn first_last_by_symbol(&self) -> Result<Vec<FirstLastPrice>, SqlxError> {
        let pool = self.connection.get_pool();

        debug!("Fetching first/last prices per symbol");

        let result = sqlx::query_as::<_, FirstLastPrice>(SELECT_FIRST_LAST_BY_SYMBOL)
            .fetch_all(pool)
            .await;

        match &result {
            Ok(rows) => debug!("Fetched first/last prices for {} symbols", rows.len()),
            Err(e) => error!("Error fetching first/last prices: {}", e),
        }

        result
    }

    async fn daily_average_price(&self) -> Result<Vec<BucketAveragePrice>, SqlxError> {
        let pool = self.connection.get_pool();

        debug!("Fetching daily average prices over the last week");

        let result = sqlx::query_as::<_, BucketAveragePrice>(SELECT_DAILY_AVERAGE_PRICE)
            .fetch_all(pool)
            .await;

        match &result {
            Ok(rows) => debug!("Fetched {} bucket averages", rows.len()),
            Err(e) => error!("Error fetching bucket averages: {}", e),
        }

        result
    }

    async fn daily_candlesticks(&self) -> Result<Vec<DailyCandlestick>, SqlxError> {
        let pool = self.connection.get_pool();

        debug!("Computing daily candlesticks from the base table");

        let result = sqlx::query_as::<_, DailyCandlestick>(SELECT_DAILY_CANDLESTICKS)
            .fetch_all(pool)
            .await;

        match &result {
            Ok(rows) => debug!("Computed {} daily candlesticks", rows.len()),
            Err(e) => error!("Error computing daily candlesticks: {}", e),
        }

        result
    }

    async fn candlesticks_from_view(&self) -> Result<Vec<DailyCandlestick>, SqlxError> {
        let pool = self.connection.get_pool();

        debug!("Reading daily candlesticks from stock_candlestick_daily");

        let result = sqlx::query_as::<_, DailyCandlestick>(SELECT_CANDLESTICKS_FROM_VIEW)
            .fetch_all(pool)
            .await;

        match &result {
            Ok(rows) => debug!("Read {} candlesticks from the view", rows.len()),
            Err(e) => error!("Error reading from stock_candlestick_daily: {}", e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_window_is_strict() {
        // A tick at exactly now() - 3 days is excluded
        assert!(SELECT_RECENT_WINDOW.contains("time > now() - INTERVAL '3 days'"));
        assert!(!SELECT_RECENT_WINDOW.contains(">="));
    }

    #[test]
    fn test_top_ten_orders_time_then_price() {
        assert!(SELECT_TOP_TEN_BY_PRICE.contains("ORDER BY time DESC, price DESC"));
        assert!(SELECT_TOP_TEN_BY_PRICE.contains("LIMIT 10"));
    }

    #[test]
    fn test_first_last_aliases_match_row_type() {
        assert!(SELECT_FIRST_LAST_BY_SYMBOL.contains("first(price, time) AS first_price"));
        assert!(SELECT_FIRST_LAST_BY_SYMBOL.contains("last(price, time) AS last_price"));
        assert!(SELECT_FIRST_LAST_BY_SYMBOL.contains("GROUP BY symbol"));
    }

    #[test]
    fn test_daily_average_buckets_one_week() {
        assert!(SELECT_DAILY_AVERAGE_PRICE.contains("time_bucket('1 day', time) AS bucket"));
        assert!(SELECT_DAILY_AVERAGE_PRICE.contains("INTERVAL '1 week'"));
        assert!(SELECT_DAILY_AVERAGE_PRICE.contains("ORDER BY bucket, symbol"));
    }

    #[test]
    fn test_candlestick_queries_order_day_descending() {
        assert!(SELECT_DAILY_CANDLESTICKS.contains("ORDER BY day DESC, symbol"));
        assert!(SELECT_CANDLESTICKS_FROM_VIEW.contains("ORDER BY day DESC, symbol"));
    }
}
