//! Runtime services and shared state for lannz-ai.

use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tracing::instrument;

use crate::{
    base::{
        config::Config,
        facts::Facts,
        types::{Res, Void},
    },
    service::{http, llm::LlmClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration, the facts document, and the LLM client.
/// It is designed to be trivially cloneable, allowing it to be handed to every
/// request without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The facts document, read once at startup.
    pub facts: Facts,
    /// The LLM client instance.
    pub llm: LlmClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Load the facts document.
        let facts = Facts::load(Path::new(&config.facts_path)).await?;

        // Initialize the LLM client.
        let llm = LlmClient::openai(&config)?;

        Ok(Self { config, facts, llm })
    }

    /// Build the HTTP application for this runtime.
    pub fn router(&self) -> Router {
        http::router(self.clone())
    }

    /// Bind the configured address and serve until shutdown.
    pub async fn start(&self) -> Void {
        let listener = TcpListener::bind(self.config.socket_addr()?).await?;

        http::serve(listener, self.router()).await
    }
}
