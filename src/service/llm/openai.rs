//! OpenAI-compatible implementation of the LLM client.
//!
//! Works against any server speaking the chat completion API, such as Ollama
//! exposing `/v1/chat/completions` on localhost.

use std::sync::Arc;
use std::time::Duration;

use crate::base::{
    config::Config,
    types::{AnswerContext, Res},
};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
};
use async_trait::async_trait;
use backoff::ExponentialBackoff;
use tracing::{debug, info, instrument};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    pub fn openai(config: &Config) -> Res<Self> {
        let client = OpenAiLlmClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// OpenAI-compatible LLM client implementation.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    client: Client<OpenAIConfig>,
    config: Config,
}

impl OpenAiLlmClient {
    /// Create a new OpenAI-compatible LLM client.
    #[instrument(name = "OpenAiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let cfg = OpenAIConfig::new().with_api_base(config.llm_api_base.clone()).with_api_key(config.llm_api_key.clone());

        let mut http_client = reqwest::Client::builder();
        if let Some(secs) = config.llm_timeout_secs {
            http_client = http_client.timeout(Duration::from_secs(secs));
        }

        // Each question gets exactly one attempt: a zero time budget turns off rate-limit retries.
        let no_retry = ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        info!("Using model `{}` at `{}`.", config.llm_model, config.llm_api_base);

        Ok(Self {
            client: Client::with_config(cfg).with_http_client(http_client.build()?).with_backoff(no_retry),
            config: config.clone(),
        })
    }

    /// Build the answer agent request: the system prompt, then the user's question.
    #[instrument(name = "OpenAiLlmClient::build_answer_agent_request", skip_all)]
    fn build_answer_agent_request(&self, context: &AnswerContext) -> Res<CreateChatCompletionRequest> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default().content(context.system_prompt.clone()).build()?.into(),
            ChatCompletionRequestUserMessageArgs::default().content(context.question.clone()).build()?.into(),
        ];

        Ok(CreateChatCompletionRequestArgs::default()
            .model(&self.config.llm_model)
            .messages(messages)
            .temperature(self.config.llm_temperature)
            .build()?)
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    #[instrument(name = "OpenAiLlmClient::get_answer_agent_response", skip_all)]
    async fn get_answer_agent_response(&self, context: &AnswerContext) -> Res<String> {
        let request = self.build_answer_agent_request(context)?;

        debug!("Sending chat completion request with {} messages.", request.messages.len());

        let response = self.client.chat().create(request).await?;

        parse_openai_chat_response(&response)
    }
}

/// Pull the first choice's content out of a chat completion response.
#[instrument(skip_all)]
pub fn parse_openai_chat_response(response: &CreateChatCompletionResponse) -> Res<String> {
    info!("LLM response has {} choices.", response.choices.len());

    let choice = response.choices.first().ok_or_else(|| anyhow::anyhow!("LLM response has no choices."))?;

    if let Some(refusal) = &choice.message.refusal {
        return Err(anyhow::anyhow!("Request refused: {refusal}"));
    }

    choice.message.content.clone().ok_or_else(|| anyhow::anyhow!("LLM response choice has no content."))
}

// Tests.
