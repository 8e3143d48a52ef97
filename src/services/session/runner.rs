use crate::app_state::models::AppState;
use crate::utils::table::{Table, Tabular};
use std::sync::Arc;
use tracing::info;

/// Runs the fixed demo sequence against one database session: provision
/// the stock schema, walk through the analytical queries, create the
/// continuous aggregate and read it back. Any statement failure stops
/// the sequence and propagates to the caller.
pub struct SessionRunner {
    app_state: Arc<AppState>,
}

impl SessionRunner {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self { app_state }
    }

    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let schema_repo = &self.app_state.postgres_service.repository_schema;
        let tick_repo = &self.app_state.postgres_service.repository_stock_ticks;

        info!("Provisioning stock schema");
        schema_repo.provision().await?;

        print_step(
            "Select all stock data from the last 3 days",
            &tick_repo.recent_window().await?,
        );

        print_step(
            "Select top 10 stocks traded by price",
            &tick_repo.top_ten_by_price().await?,
        );

        print_step(
            "Get the first and last trading value of each company with first() and last()",
            &tick_repo.first_last_by_symbol().await?,
        );

        print_step(
            "Aggregate by an arbitrary length of time using time_bucket",
            &tick_repo.daily_average_price().await?,
        );

        print_step(
            "Daily candlesticks computed from the raw ticks",
            &tick_repo.daily_candlesticks().await?,
        );

        info!("Creating continuous aggregate stock_candlestick_daily");
        schema_repo.create_candlestick_view().await?;

        print_step(
            "Daily candlesticks from the continuous aggregate",
            &tick_repo.candlesticks_from_view().await?,
        );

        Ok(())
    }
}

/// Prints a descriptive label line followed by the rendered result set
fn print_step<T: Tabular>(label: &str, rows: &[T]) {
    println!("\n{}", label);
    println!("{}", Table::from_rows(rows).render());
}
