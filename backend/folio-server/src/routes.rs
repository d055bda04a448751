use crate::{AppState, health, list_projects, submit_project};

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Project API
        .route("/api/projects", get(list_projects).post(submit_project))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Uploaded images
        .nest_service(
            state.uploads.public_path(),
            ServeDir::new(state.uploads.root()),
        );

    // Site pages for everything else
    if let Some(ref site_dir) = state.site_dir {
        router = router.fallback_service(ServeDir::new(site_dir));
    }

    router
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
