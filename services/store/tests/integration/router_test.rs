//! Router smoke tests against a disconnected database handle. Routes that
//! reach the store are exercised end to end by the `seed` binary against a
//! live database instead.

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use storefront_store::router::build_router;
use storefront_store::state::AppState;

fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn healthz_returns_200() {
    let server = test_server();
    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn readyz_returns_200() {
    let server = test_server();
    let response = server.get("/readyz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let server = test_server();
    let response = server.get("/carts").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_uuid_user_id_is_rejected() {
    let server = test_server();
    let response = server.get("/users/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
