use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// The body of a `POST /ask` request.
///
/// The question is kept as a raw JSON value so that `null`, numbers, and other
/// non-string values can be rejected the same way as a missing field.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<Value>,
}

/// The body of a successful `POST /ask` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// The body of any failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything the answer agent needs to produce a completion.
#[derive(Debug, Clone, Default)]
pub struct AnswerContext {
    /// The persona and facts block, sent as the system message.
    pub system_prompt: String,
    /// The caller's question, sent verbatim as the user message.
    pub question: String,
}

/// Errors surfaced to callers of the ask endpoint.
///
/// The display text is exactly what the caller receives.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AskError {
    #[error("No question provided")]
    InvalidRequest,
    #[error("Failed to get a response from the AI")]
    BackendUnavailable,
}
