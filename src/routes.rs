// src/routes.rs

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{emissions, glacier, meta, quiz},
    state::AppState,
};

/// Frontend dev servers allowed to call the API with credentials.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Assembles the main application router.
///
/// * Merges all sub-routers (emissions, quiz, glacier, stats).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (emissions table and content catalog).
pub fn create_router(state: AppState) -> Router {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);

    // Credentials rule out wildcards, so methods and headers are mirrored instead.
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let emissions_routes = Router::new()
        .route("/", get(emissions::list_emissions))
        .route("/years", get(emissions::list_years));

    let quiz_routes = Router::new()
        .route("/", post(quiz::submit_quiz))
        .route("/questions", get(quiz::list_questions));

    Router::new()
        .route("/", get(meta::root))
        .route("/api/stats", get(meta::climate_stats))
        .route("/api/your-glacier", get(glacier::your_glacier))
        .nest("/api/emissions", emissions_routes)
        .nest("/api/quiz", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
