//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for OmniRoute, built on the Axum web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//! - [`api::openapi`](crate::api::openapi) - Generated OpenAPI document
//!
//! # API Endpoints
//!
//! ## Catalog
//! - `GET /api/health` - Health check with the active provider and model
//! - `GET /api/roles` - The four role cards shown on the landing page
//! - `GET /api/dashboards/{role}?tab=` - Dashboard projection for a role
//!
//! ## Assistant
//! - `POST /api/assistant/reply` - One reply for a role, no server-side state
//!
//! ## Conversations (`/api/conversations`)
//! - `POST /api/conversations` - Start a conversation greeted for a role
//! - `GET /api/conversations/{id}` - Transcript and loading flag
//! - `DELETE /api/conversations/{id}` - Forget a conversation
//! - `PUT /api/conversations/{id}/role` - Switch role and reset the transcript
//! - `POST /api/conversations/{id}/messages` - Send a message and wait for the reply
//!
//! There is no authentication; the login screen is cosmetic.
//!
//! # OpenAPI Documentation
//!
//! The document is always served at `/api-docs/openapi.json`. With the
//! `swagger-ui` feature, interactive docs live at `/swagger-ui/`.

use crate::AppState;
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// OpenAPI document.
pub mod openapi;
/// Router configuration and route definitions.
pub mod routes;
/// Embedded frontend.
#[cfg(feature = "ui")]
pub mod ui;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the complete application: `/api`, the OpenAPI document, optional
/// Swagger UI and embedded frontend, plus tracing, CORS and compression.
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config_manager.config().server.cors_origins);

    let router = Router::new()
        .nest("/api", routes::create_router())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(openapi::ApiDoc::openapi()) }),
        );

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/swagger.json", openapi::ApiDoc::openapi()),
    );

    #[cfg(feature = "ui")]
    let router = router.fallback(ui::serve_ui);

    router
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .inspect_err(|_| warn!(origin = %origin, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    base.allow_origin(AllowOrigin::list(parsed))
}
