use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::application::RoastGenerator;
use async_trait::async_trait;
use roastmystack_errors::AppError;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o";
const MAX_TOKENS: u32 = 500;

const SYSTEM_PROMPT: &str = "You are a witty, sarcastic, and opinionated developer who roasts tech stacks in a fun and clever way. Keep it brief and memeable. Always follow the exact formatting instructions provided.";

/// Chat-completions client for the generation service. One call per
/// submission, no retries; a retried submission burns another API call and
/// may produce a different roast.
pub struct OpenAiClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl RoastGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(MODEL, SYSTEM_PROMPT, prompt.to_string(), MAX_TOKENS);

        let response = self
            .http_client
            .post(OPENAI_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("generation service error: {} - {}", status, body);
            return Err(AppError::Generation(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| AppError::Generation("no choices in response".to_string()))
    }
}
