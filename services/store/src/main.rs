use sea_orm::Database;
use tracing::info;

use storefront_store::config::StoreConfig;
use storefront_store::router::build_router;
use storefront_store::state::AppState;

#[tokio::main]
async fn main() {
    storefront_core::tracing::init_tracing();

    let config = StoreConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.store_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("store service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
