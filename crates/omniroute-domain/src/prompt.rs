//! Fixed assistant copy: greetings, system instruction and reply fallbacks.

use crate::role::Role;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

/// Reply shown when the model returns no text.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that request.";

/// Marker every missing-credential error message carries.
pub const MISSING_KEY_MARKER: &str = "API key is missing";

const LANDING_GREETING: &str = "Welcome to OmniRoute! I'm your AI Logistics Advisor. How can I help you explore our platform's capabilities today?";

/// First transcript message for a role.
pub fn greeting(role: Role) -> String {
    match role {
        Role::Landing => LANDING_GREETING.to_string(),
        _ => format!(
            "Hello! I'm your OmniRoute AI Assistant. How can I help you with your {} operations today?",
            role
        ),
    }
}

/// System instruction sent alongside every prompt.
pub fn system_instruction(role: Role) -> String {
    let context = if role.is_operational() {
        "- The user is logged into their dashboard."
    } else {
        "- The user is currently on the landing page exploring the product."
    };

    format!(
        "You are the OmniRoute AI Assistant, a specialized logistics expert.
OmniRoute is a high-performance logistics ERP system.

Current Context:
- User Role: {role}
{context}

Your capabilities:
1. Explain logistics concepts (Last-mile delivery, cross-docking, route optimization).
2. Provide advice on fleet management and supply chain efficiency.
3. Explain how OmniRoute helps different roles (Customers, Drivers, Partners, Dispatchers).
4. Answer technical questions about logistics data and trends.

Tone: Professional, efficient, and data-driven. Use industry terminology (e.g., SLA, ETA, SKU, LTL, FTL).

If the user asks about specific data in their dashboard, explain that you are an AI advisor and can help interpret logistics trends and best practices based on the data they see."
    )
}

/// Assistant message for a failed request.
///
/// A trailing period on `description` is dropped so the sentence reads once.
pub fn error_reply(description: &str) -> String {
    let description = description.trim();
    let description = description.strip_suffix('.').unwrap_or(description);
    let description = if description.is_empty() {
        "An unexpected error occurred"
    } else {
        description
    };
    format!(
        "Error: {}. Please check the server logs for more details.",
        description
    )
}
