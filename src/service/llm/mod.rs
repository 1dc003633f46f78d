//! Integration with Large Language Model services.
//!
//! The module defines the `GenericLlmClient` trait that can be implemented
//! for different inference backends, with a default implementation for any
//! OpenAI-compatible chat completion API (e.g., a local Ollama server).

pub mod openai;

use crate::base::types::{AnswerContext, Res};
use async_trait::async_trait;
use std::ops::Deref;
use std::sync::Arc;

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// Implementing this trait allows different inference backends to be used,
/// and lets tests substitute a mock.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate an answer from the answer agent.
    ///
    /// Sends the system prompt followed by the user's question, and returns the
    /// content of the first completion choice exactly as the backend produced it.
    async fn get_answer_agent_response(&self, context: &AnswerContext) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
