use crate::api::handlers::{assistant, catalog, conversations, health};
use crate::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

/// All `/api` routes, relative to the `/api` prefix.
pub fn create_router() -> Router<AppState> {
    let catalog_routes = Router::new()
        .route("/health", get(health::health))
        .route("/roles", get(catalog::list_roles))
        .route("/dashboards/{role}", get(catalog::get_dashboard));

    let assistant_routes = Router::new()
        .route("/assistant/reply", post(assistant::reply))
        .route("/conversations", post(conversations::create_conversation))
        .route(
            "/conversations/{id}",
            get(conversations::get_conversation).delete(conversations::delete_conversation),
        )
        .route("/conversations/{id}/role", put(conversations::set_role))
        .route(
            "/conversations/{id}/messages",
            post(conversations::send_message),
        );

    catalog_routes.merge(assistant_routes)
}
