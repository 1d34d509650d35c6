use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;
use wordpuzzle::config::Config;
use wordpuzzle::{api, Dictionary, GameService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let dictionary = Dictionary::load(&config.dictionary_path).map_err(|e| {
        format!(
            "failed to load dictionary from {}: {e}",
            config.dictionary_path.display()
        )
    })?;

    let db = entity::connect(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!("database ready");

    let service = GameService::new(db, Arc::new(dictionary));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, api::router(service)).await?;

    Ok(())
}
