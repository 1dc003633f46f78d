//! Library root for `lannz-ai`.
//!
//! Lannz AI is a small HTTP gateway that answers questions about Lannz:
//! - Accepts a question over `POST /ask`
//! - Builds a system prompt from a static facts document and a fixed persona
//! - Asks a locally hosted, OpenAI-compatible inference server for an answer
//! - Relays the answer (or a generic error) back to the caller
//!
//! The facts and the LLM client are constructed once at startup and passed to
//! the handler through the [`runtime::Runtime`], so the handler can be tested
//! against a mocked backend.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the lannz-ai runtime:
/// - Loads the facts document
/// - Creates the LLM client
/// - Serves the HTTP API until shutdown
pub async fn start(config: Config) -> Void {
    info!("Starting lannz-ai ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    info!("Make sure the inference server at `{}` is running.", runtime.config.llm_api_base);

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
