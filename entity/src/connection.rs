use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    // every connection to an in-memory sqlite url opens its own empty database
    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }
    Database::connect(options).await
}
