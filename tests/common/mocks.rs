//! Mock implementations for testing.
//!
//! Mock LLM clients and factories shared by the integration tests, so no
//! test needs a real generation service.

use omniroute::llm::{LLMClient, LLMClientFactoryTrait, Provider};
use omniroute::types::{AppError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// A prompt the mock received: `(system_instruction, prompt)`.
pub type RecordedCall = (String, String);

/// Mock LLM client with a canned reply.
///
/// Clones share the call log and the gate, so a factory can hand out copies
/// while the test keeps the original.
///
/// # Examples
///
/// ```ignore
/// let client = MockLLMClient::new("Stop 2 ETA is 14:05.");
/// let client = MockLLMClient::failing();
/// let (client, gate) = MockLLMClient::gated("late reply");
/// gate.notify_one(); // let the pending call finish
/// ```
#[derive(Clone)]
pub struct MockLLMClient {
    response: String,
    should_fail: bool,
    gate: Option<Arc<Notify>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockLLMClient {
    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            gate: None,
            calls: Arc::default(),
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    /// A client whose replies wait until the returned gate is notified.
    pub fn gated(response: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let client = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::new(response)
        };
        (client, gate)
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_system("", prompt).await
    }

    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls
            .lock()
            .push((system.to_string(), prompt.to_string()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock LLM factory for tests requiring complete isolation from external services.
pub struct MockLLMFactory {
    provider: Provider,
    client: Option<MockLLMClient>,
    created: AtomicUsize,
}

impl MockLLMFactory {
    /// Create a new mock factory that returns the given mock client.
    pub fn new(client: MockLLMClient) -> Self {
        Self {
            provider: Provider::Gemini {
                api_key: Some("mock-key".to_string()),
                api_base: "http://127.0.0.1:9".to_string(),
                model: "mock-model".to_string(),
                timeout: None,
            },
            client: Some(client),
            created: AtomicUsize::new(0),
        }
    }

    /// A factory whose Gemini provider has no credential, so client
    /// creation fails exactly like an unconfigured server.
    pub fn missing_key() -> Self {
        Self {
            provider: Provider::Gemini {
                api_key: None,
                api_base: "http://127.0.0.1:9".to_string(),
                model: "mock-model".to_string(),
                timeout: None,
            },
            client: None,
            created: AtomicUsize::new(0),
        }
    }

    /// How many clients were requested.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMClientFactoryTrait for MockLLMFactory {
    fn default_provider(&self) -> Provider {
        self.provider.clone()
    }

    async fn create_default(&self) -> Result<Box<dyn LLMClient>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        match &self.client {
            Some(client) => Ok(Box::new(client.clone())),
            None => self.provider.create_client().await,
        }
    }
}
