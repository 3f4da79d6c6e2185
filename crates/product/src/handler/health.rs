use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

/// Liveness only; does not touch the database.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Healthy")
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}
