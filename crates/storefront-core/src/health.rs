use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check. The store service considers
/// itself ready as soon as it is serving; the pool reconnects on demand.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
