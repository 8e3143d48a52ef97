use crate::db::postgres::connection::PostgresConnection;
use crate::db::postgres::repository::schema_repository::{
    StructSchemaRepository, TraitSchemaRepository,
};
use crate::db::postgres::repository::stock_tick_repository::{
    StructStockTickRepository, TraitStockTickRepository,
};
use crate::env_config::models::app_setting::AppSettings;
use std::sync::Arc;
use tracing::{error, info};

pub struct PostgresService {
    // Connection
    pub connection: Arc<PostgresConnection>,

    // Repositories over the stock tick schema
    pub repository_schema: Arc<dyn TraitSchemaRepository + Send + Sync>,
    pub repository_stock_ticks: Arc<dyn TraitStockTickRepository + Send + Sync>,
}

impl PostgresService {
    pub async fn new(settings: &Arc<AppSettings>) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Initializing PostgreSQL service components");

        // Initialize PostgreSQL connection
        let postgres_connection = match PostgresConnection::new(settings.clone()).await {
            Ok(conn) => {
                info!("PostgreSQL connection established successfully");
                Arc::new(conn)
            }
            Err(e) => {
                error!("Failed to establish PostgreSQL connection: {}", e);
                return Err(Box::new(e));
            }
        };

        // Initialize repositories
        info!("Initializing repositories");

        let schema_repository = Arc::new(StructSchemaRepository::new(postgres_connection.clone()))
            as Arc<dyn TraitSchemaRepository + Send + Sync>;

        let stock_tick_repository =
            Arc::new(StructStockTickRepository::new(postgres_connection.clone()))
                as Arc<dyn TraitStockTickRepository + Send + Sync>;

        info!("PostgreSQL service initialized successfully");
        Ok(Self {
            connection: postgres_connection,
            repository_schema: schema_repository,
            repository_stock_ticks: stock_tick_repository,
        })
    }
}
