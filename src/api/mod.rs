use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
            ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use anyhow::{Context, Result};
use tracing::debug;
use crate::config::Config;
use crate::error::BackendError;

/// LLM 추론 백엔드 계약. 프롬프트와 모델 식별자를 받아 텍스트 완성을 돌려준다.
///
/// 싱글톤이 아니라 주입되는 능력으로 모델링한다 - 테스트에서는 정해진 응답이나
/// 오류를 결정적으로 돌려주는 구현을 꽂는다. 상태 없는 요청/응답이므로
/// 동시 호출에 안전해야 한다.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, BackendError>;
}

pub struct OpenAIClient {
    client: Client<OpenAIConfig>,
    temperature: f32,
    max_tokens: u16,
}

impl OpenAIClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key().context("API 키가 설정되지 않았습니다")?;

        let openai_config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(openai_config);

        Ok(Self {
            client,
            temperature: config.model_preferences.temperature,
            max_tokens: config.model_preferences.max_tokens,
        })
    }
}

#[async_trait]
impl InferenceBackend for OpenAIClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, BackendError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content("You are a code quality analysis assistant. Respond only in the requested JSON shape.")
                .build()
                .map_err(|e| BackendError::Request(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| BackendError::Request(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;

        debug!(model, prompt_bytes = prompt.len(), "OpenAI 요청 전송");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or(BackendError::EmptyResponse)?;

        // 빈 완성은 "응답 없음"과 동일하게 취급한다
        if content.trim().is_empty() {
            return Err(BackendError::EmptyResponse);
        }

        Ok(content.to_string())
    }
}
