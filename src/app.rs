use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/heatmap", get(handlers::get_heatmap))
        .route(
            "/api/activity",
            get(handlers::get_activity).post(handlers::post_activity),
        )
        .with_state(state)
}
