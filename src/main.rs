//! Hotel API server: reads config, prepares the store (schema + seed), serves `/api`.

use hotel_cms::{
    app, ensure_database_exists, AppState, HotelStore, MemoryHotelStore, PgHotelStore,
    ServerConfig, StoreKind,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hotel_cms=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let state = match config.store {
        StoreKind::Postgres => {
            let options = config.database.connect_options()?;
            ensure_database_exists(&options).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?;
            let store = PgHotelStore::new(pool);
            let seeded = store.initialize().await?;
            tracing::info!(?seeded, "database initialized");
            AppState::new(store)
        }
        StoreKind::Memory => {
            let store = MemoryHotelStore::new();
            store.initialize().await?;
            tracing::warn!("using in-memory store; data is lost on exit");
            AppState::new(store)
        }
    };

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on http://{}/api", listener.local_addr()?);
    axum::serve(listener, app(state, config.body_limit)).await?;
    Ok(())
}
