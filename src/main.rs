mod app_state;
mod db;
mod env_config;
mod logger;
mod services;
mod utils;

use app_state::models::AppState;
use db::postgres::postgres_service::PostgresService;
use env_config::models::{app_config::AppConfig, app_env::AppEnv, app_setting::AppSettings};
use services::session::runner::SessionRunner;
use std::sync::Arc;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    // Load settings and set up logging
    let settings: Arc<AppSettings> = Arc::new(initialize_application());

    // Open the database session
    let postgres_service = initialize_database_connection(settings.clone()).await;

    let app_state: Arc<AppState> = Arc::new(AppState {
        settings: settings.clone(),
        postgres_service: Arc::new(postgres_service),
    });

    // Run the fixed query sequence; any failure aborts the process
    let runner = SessionRunner::new(app_state);
    if let Err(err) = runner.run().await {
        error!("Session failed: {}", err);
        std::process::exit(1);
    }

    info!("Session completed successfully");
}

/// Initializes settings and logging
fn initialize_application() -> AppSettings {
    let environment = AppEnv::new();
    let config = AppConfig::new(&environment.env);
    let app_settings = AppSettings {
        app_config: config,
        app_env: environment,
    };

    logger::init_logger(
        &app_settings.app_config.log.level,
        &app_settings.app_config.log.format,
        app_settings.app_env.is_local(),
    )
    .expect("Failed to initialize logger");

    info!("Starting stock ticks session...");
    info!("Current environment: {}", app_settings.app_env.env);

    if app_settings.app_env.is_local() {
        info!("Running in local development mode");
        debug!("Configuration details: {:#?}", app_settings);
    } else {
        info!("Running in production mode");
    }

    app_settings
}

/// Establishes the database connection
async fn initialize_database_connection(settings: Arc<AppSettings>) -> PostgresService {
    info!("Initializing database connection...");

    match PostgresService::new(&settings).await {
        Ok(service) => {
            info!("PostgreSQL connection established successfully");
            service
        }
        Err(err) => {
            error!("Failed to connect to PostgreSQL: {}", err);
            panic!("Cannot continue without PostgreSQL connection");
        }
    }
}
