//! One-shot database bootstrap: drop and recreate the schema, then load the
//! sample dataset. Destructive — meant for local development and test
//! environments only.

use sea_orm::Database;
use tracing::info;

use storefront_store::config::StoreConfig;
use storefront_store::seed::{load_fixtures, reset_schema};

#[tokio::main]
async fn main() {
    storefront_core::tracing::init_tracing();

    let config = StoreConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    info!("resetting schema");
    reset_schema(&db).await.expect("failed to reset schema");

    let fixtures = load_fixtures(&db).await.expect("failed to load fixtures");
    info!(
        users = fixtures.users.len(),
        addresses = fixtures.addresses.len(),
        orders = fixtures.orders.len(),
        "seed complete"
    );
}
