use crate::api::handlers::{assistant, catalog, conversations, health};
use crate::types::{
    ConversationSnapshot, CreateConversationRequest, DashboardView, HealthResponse, MessageView,
    ReplyRequest, ReplyResponse, RoleCardView, SendMessageRequest, SendMessageResponse,
    SetRoleRequest,
};
use utoipa::OpenApi;

/// OpenAPI document for the `/api` surface, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        catalog::list_roles,
        catalog::get_dashboard,
        assistant::reply,
        conversations::create_conversation,
        conversations::get_conversation,
        conversations::delete_conversation,
        conversations::set_role,
        conversations::send_message,
    ),
    components(schemas(
        HealthResponse,
        RoleCardView,
        DashboardView,
        ReplyRequest,
        ReplyResponse,
        CreateConversationRequest,
        SetRoleRequest,
        SendMessageRequest,
        MessageView,
        ConversationSnapshot,
        SendMessageResponse,
    )),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "catalog", description = "Role cards and dashboard projections"),
        (name = "assistant", description = "Stateless logistics assistant replies"),
        (name = "conversations", description = "Server-held assistant conversations")
    ),
    info(
        title = "OmniRoute API",
        description = "Logistics operations portal with role dashboards and an AI assistant",
        version = "0.1.0"
    )
)]
/// OpenAPI document for the HTTP API.
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/health",
            "/api/roles",
            "/api/dashboards/{role}",
            "/api/assistant/reply",
            "/api/conversations",
            "/api/conversations/{id}",
            "/api/conversations/{id}/role",
            "/api/conversations/{id}/messages",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
