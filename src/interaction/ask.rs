use serde_json::Value;
use tracing::{error, info, instrument};

use crate::{
    base::{
        facts::Facts,
        prompts,
        types::{AnswerContext, AskError, AskRequest},
    },
    service::llm::LlmClient,
};

/// Pull a usable question out of the request body.
///
/// Only a non-empty JSON string counts; a missing field, `null`, and any
/// other JSON type are all treated as "no question".
pub fn extract_question(request: &AskRequest) -> Result<String, AskError> {
    match &request.question {
        Some(Value::String(question)) if !question.is_empty() => Ok(question.clone()),
        _ => Err(AskError::InvalidRequest),
    }
}

/// Answer a single question about Lannz.
///
/// Builds the system prompt from the facts, makes one call to the inference
/// backend, and returns the trimmed answer. Backend failures are logged here
/// and reported to the caller without detail.
#[instrument(skip_all)]
pub async fn handle_ask(facts: &Facts, llm: &LlmClient, question: &str) -> Result<String, AskError> {
    if question.is_empty() {
        return Err(AskError::InvalidRequest);
    }

    let context = AnswerContext {
        system_prompt: prompts::build_system_prompt(facts),
        question: question.to_string(),
    };

    match llm.get_answer_agent_response(&context).await {
        Ok(answer) => {
            info!("Answered question ({} bytes).", answer.len());
            Ok(answer.trim().to_string())
        }
        Err(e) => {
            error!("Error calling the inference backend: {e:#}");
            Err(AskError::BackendUnavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(body: Value) -> AskRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_extract_question_accepts_non_empty_string() {
        assert_eq!(extract_question(&request(json!({ "question": "Who is Lannz?" }))).unwrap(), "Who is Lannz?");
        assert_eq!(extract_question(&request(json!({ "question": "  " }))).unwrap(), "  ");
    }

    #[test]
    fn test_extract_question_rejects_missing_and_empty() {
        for body in [json!({}), json!({ "question": "" }), json!({ "question": null }), json!({ "other": "field" })] {
            assert_eq!(extract_question(&request(body)), Err(AskError::InvalidRequest));
        }
    }

    #[test]
    fn test_extract_question_rejects_non_strings() {
        for body in [json!({ "question": 0 }), json!({ "question": false }), json!({ "question": 42 }), json!({ "question": ["a"] }), json!({ "question": { "q": "a" } })] {
            assert_eq!(extract_question(&request(body)), Err(AskError::InvalidRequest));
        }
    }
}
