//! MedScrub Server - medical note anonymization HTTP API
//!
//! This library provides the MedScrub HTTP server: the user-facing pages
//! (how-it-works, example, audio upload, text input), the JSON anonymize
//! endpoints, and the health surface.

pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use error::*;
pub use server::MedscrubServer;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router with all routes and middleware
pub fn create_app(server: MedscrubServer) -> Router {
    let router = routes::create_routes().merge(
        SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    );

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(32 * 1024 * 1024)),
        )
        .with_state(server)
}
