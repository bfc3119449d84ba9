//! LLM Provider Clients and Abstractions
//!
//! A small, provider-agnostic layer over the generation services the
//! assistant can call.
//!
//! # Architecture
//!
//! - [`LLMClient`] - The core trait that all providers implement
//! - [`LLMClientFactoryTrait`] - Anything that can create a client on demand
//! - [`LLMClientFactory`] - Factory with a fixed provider
//! - [`ConfigBasedLLMFactory`] - Creates clients from the live `omniroute.toml`
//!
//! # Supported Providers
//!
//! - Gemini (always available) - `POST {api_base}/models/{model}:generateContent`
//! - Ollama (feature `ollama`) - `POST {base_url}/api/generate`
//!
//! Both go through `reqwest`; neither streams.

/// Core LLM client trait, provider enum and factories.
pub mod client;
/// Google Gemini client.
pub mod gemini;

/// Local Ollama client.
#[cfg(feature = "ollama")]
pub mod ollama;

pub use client::{
    ConfigBasedLLMFactory, LLMClient, LLMClientFactory, LLMClientFactoryTrait, Provider,
};
