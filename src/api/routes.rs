use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{weather, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness probe
        .route("/", get(weather::root))
        .route(
            "/weather",
            get(weather::list_readings).post(weather::create_reading),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
