use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use storefront_core::health::{healthz, readyz};
use storefront_core::middleware::request_id_layer;

use crate::handlers::{
    address::list_user_addresses,
    order::list_user_orders,
    user::{create_user, get_user, list_users, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}", patch(update_user))
        // Per-user sub-resources
        .route("/users/{id}/addresses", get(list_user_addresses))
        .route("/users/{id}/orders", get(list_user_orders))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
