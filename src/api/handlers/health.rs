use crate::{types::HealthResponse, AppState};
use axum::{extract::State, Json};

/// Liveness probe with the active provider and model
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.llm_factory.default_provider();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        provider: provider.name().to_string(),
        model: provider.model().to_string(),
    })
}
