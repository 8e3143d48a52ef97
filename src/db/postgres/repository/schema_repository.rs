use crate::db::postgres::connection::PostgresConnection;
use async_trait::async_trait;
use sqlx::Error as SqlxError;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Base table DDL. No IF NOT EXISTS on purpose: re-running against an
/// already-provisioned database must fail with "relation already exists".
pub const CREATE_COMPANY_TABLE: &str =
    "CREATE TABLE company(symbol text PRIMARY KEY NOT NULL, name text NOT NULL)";

pub const CREATE_STOCK_TABLE: &str = "CREATE TABLE stocks_real_time(
    time TIMESTAMPTZ NOT NULL,
    symbol text NOT NULL,
    price float NOT NULL,
    day_volume INT NULL)";

pub const CREATE_SYMBOL_TIME_INDEX: &str =
    "CREATE INDEX ix_symbol_time ON stocks_real_time (symbol, time DESC)";

pub const CREATE_HYPERTABLE: &str = "SELECT create_hypertable('stocks_real_time', 'time')";

/// Continuous aggregate over 1-day buckets, refreshed incrementally by
/// the engine as base rows arrive.
pub const CREATE_CANDLESTICK_VIEW: &str = "CREATE MATERIALIZED VIEW stock_candlestick_daily
WITH (timescaledb.continuous) AS
SELECT
    time_bucket('1 day', time) AS day,
    symbol,
    max(price) AS high,
    first(price, time) AS open,
    last(price, time) AS close,
    min(price) AS low
FROM stocks_real_time
GROUP BY day, symbol";

#[async_trait]
pub trait TraitSchemaRepository {
    /// Creates the company and tick tables, the symbol/time index,
    /// and registers stocks_real_time as a hypertable
    async fn provision(&self) -> Result<(), SqlxError>;

    /// Creates the stock_candlestick_daily continuous aggregate
    async fn create_candlestick_view(&self) -> Result<(), SqlxError>;
}

pub struct StructSchemaRepository {
    connection: Arc<PostgresConnection>,
}

impl StructSchemaRepository {
    pub fn new(connection: Arc<PostgresConnection>) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl TraitSchemaRepository for StructSchemaRepository {
    async fn provision(&self) -> Result<(), SqlxError> {
        let pool = self.connection.get_pool();

        // DDL goes through the simple protocol; utility statements and
        // the hypertable registration do not need preparing
        debug!("Creating company table");
        if let Err(e) = sqlx::raw_sql(CREATE_COMPANY_TABLE).execute(pool).await {
            error!("Error creating company table: {}", e);
            return Err(e);
        }

        debug!("Creating stocks_real_time table");
        if let Err(e) = sqlx::raw_sql(CREATE_STOCK_TABLE).execute(pool).await {
            error!("Error creating stocks_real_time table: {}", e);
            return Err(e);
        }

        debug!("Creating ix_symbol_time index");
        if let Err(e) = sqlx::raw_sql(CREATE_SYMBOL_TIME_INDEX).execute(pool).await {
            error!("Error creating ix_symbol_time index: {}", e);
            return Err(e);
        }

        debug!("Registering stocks_real_time as a hypertable");
        if let Err(e) = sqlx::raw_sql(CREATE_HYPERTABLE).execute(pool).await {
            error!("Error registering hypertable: {}", e);
            return Err(e);
        }

        info!("Stock schema provisioned");
        Ok(())
    }

    async fn create_candlestick_view(&self) -> Result<(), SqlxError> {
        let pool = self.connection.get_pool();

        debug!("Creating stock_candlestick_daily continuous aggregate");
        match sqlx::raw_sql(CREATE_CANDLESTICK_VIEW).execute(pool).await {
            Ok(_) => {
                info!("Continuous aggregate stock_candlestick_daily created");
                Ok(())
            }
            Err(e) => {
                error!("Error creating stock_candlestick_daily: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tables_have_no_idempotency_guard() {
        // A second provisioning run must fail on "relation already exists"
        assert!(!CREATE_COMPANY_TABLE.contains("IF NOT EXISTS"));
        assert!(!CREATE_STOCK_TABLE.contains("IF NOT EXISTS"));
        assert!(!CREATE_SYMBOL_TIME_INDEX.contains("IF NOT EXISTS"));
    }

    #[test]
    fn test_index_is_descending_on_time() {
        assert!(CREATE_SYMBOL_TIME_INDEX.contains("(symbol, time DESC)"));
    }

    #[test]
    fn test_candlestick_view_is_continuous() {
        assert!(CREATE_CANDLESTICK_VIEW.contains("timescaledb.continuous"));
        assert!(CREATE_CANDLESTICK_VIEW.contains("time_bucket('1 day', time)"));
        assert!(CREATE_CANDLESTICK_VIEW.contains("first(price, time) AS open"));
        assert!(CREATE_CANDLESTICK_VIEW.contains("last(price, time) AS close"));
    }
}
