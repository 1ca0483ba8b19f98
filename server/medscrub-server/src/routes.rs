pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{anonymize, health, pages},
    server::MedscrubServer,
};

/// Create health check routes
pub fn health_routes() -> Router<MedscrubServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create user-facing page routes
pub fn page_routes() -> Router<MedscrubServer> {
    Router::new()
        .route(paths::pages::HOW_IT_WORKS, get(pages::how_it_works))
        .route(paths::pages::EXAMPLE, get(pages::example))
        .route(paths::pages::AUDIO, get(pages::audio_anonymizer))
        .route(paths::pages::TEXT, get(pages::text_anonymizer))
}

/// Create anonymization API routes
pub fn anonymize_routes() -> Router<MedscrubServer> {
    Router::new()
        .route(paths::anonymize::TEXT, post(anonymize::anonymize_text))
        .route(paths::anonymize::AUDIO, post(anonymize::anonymize_audio))
}

/// Merge all route groups into the application router
pub fn create_routes() -> Router<MedscrubServer> {
    Router::new()
        .merge(health_routes())
        .merge(page_routes())
        .merge(anonymize_routes())
}
