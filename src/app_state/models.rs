use crate::db::postgres::postgres_service::PostgresService;
use crate::env_config::models::app_setting::AppSettings;
use std::sync::Arc;

/// Shared application state, constructed once at startup
pub struct AppState {
    pub settings: Arc<AppSettings>,
    pub postgres_service: Arc<PostgresService>,
}
