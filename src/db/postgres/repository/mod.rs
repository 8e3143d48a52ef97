pub mod schema_repository;
pub mod stock_tick_repository;
