pub mod berita;
pub mod pesanan;
pub mod portfolio;
pub mod services;
pub mod users;
pub mod visitor_logs;

use sea_orm::{Database, DatabaseConnection};
use std::env;

/// Create a SeaORM database connection pool from the `DATABASE_URL` env var.
pub async fn create_pool() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    Database::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Convert an optional list DTO into the JSON column representation,
/// defaulting to an empty array.
pub(crate) fn json_list(values: Option<Vec<String>>) -> serde_json::Value {
    serde_json::Value::Array(
        values
            .unwrap_or_default()
            .into_iter()
            .map(serde_json::Value::String)
            .collect(),
    )
}
