use crate::types::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

impl DatabaseConnection {
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(config.url.as_str())
            .await
            .unwrap_or_else(|err| {
                tracing::error!("Failed to connect to the database: {}", err);
                panic!("Could not open a database connection pool")
            });

        Self { pool }
    }

    pub async fn migrate(&self) {
        if let Err(err) = sqlx::migrate!().run(&self.pool).await {
            tracing::error!("Failed to apply pending migrations: {}", err);
            panic!("Database schema is out of date and could not be migrated");
        }
    }
}
