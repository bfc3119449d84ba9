use super::Assistant;
use crate::llm::LLMClientFactoryTrait;
use crate::types::{AppError, Result};
use omniroute_domain::Role;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Conversations held when no limit is configured.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 1000;

/// Conversations keyed by id. Nothing survives a restart.
///
/// The store holds at most `max_conversations` entries; creating one more
/// evicts the least recently updated conversation.
pub struct ConversationStore {
    conversations: RwLock<HashMap<String, Arc<Assistant>>>,
    factory: Arc<dyn LLMClientFactoryTrait>,
    max_conversations: usize,
}

impl ConversationStore {
    /// Store with [`DEFAULT_MAX_CONVERSATIONS`].
    pub fn new(factory: Arc<dyn LLMClientFactoryTrait>) -> Self {
        Self::with_limit(factory, DEFAULT_MAX_CONVERSATIONS)
    }

    /// Store holding at most `max_conversations` (at least one).
    pub fn with_limit(factory: Arc<dyn LLMClientFactoryTrait>, max_conversations: usize) -> Self {
        Self {
            conversations: RwLock::new(HashMap::new()),
            factory,
            max_conversations: max_conversations.max(1),
        }
    }

    /// Start a conversation greeted for `role`.
    pub fn create(&self, role: Role) -> Arc<Assistant> {
        let assistant = Arc::new(Assistant::new(role, Arc::clone(&self.factory)));
        {
            let mut conversations = self.conversations.write();
            while conversations.len() >= self.max_conversations {
                let Some(oldest) = conversations
                    .values()
                    .min_by_key(|c| c.updated_at())
                    .map(|c| c.id().to_string())
                else {
                    break;
                };
                conversations.remove(&oldest);
                debug!(conversation = %oldest, "Evicted least recently used conversation");
            }
            conversations.insert(assistant.id().to_string(), Arc::clone(&assistant));
        }
        info!(conversation = assistant.id(), %role, "Conversation created");
        assistant
    }

    /// Look up a conversation by id.
    pub fn get(&self, id: &str) -> Result<Arc<Assistant>> {
        self.conversations
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Drop a conversation. A send still running on it finishes normally.
    pub fn remove(&self, id: &str) -> Result<()> {
        self.conversations
            .write()
            .remove(id)
            .map(|_| info!(conversation = id, "Conversation removed"))
            .ok_or_else(|| not_found(id))
    }

    /// Upper bound on held conversations.
    pub fn max_conversations(&self) -> usize {
        self.max_conversations
    }

    /// Number of held conversations.
    pub fn len(&self) -> usize {
        self.conversations.read().len()
    }

    /// Whether no conversation is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Conversation '{}' not found", id))
}
