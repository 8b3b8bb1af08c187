//! Chat completions client.

use super::OpenAiService;
use crate::error::ServiceError;
use crate::model_type::ModelType;
use crate::network::Endpoint;
use crate::types::{ApiResponse, ChatMessage, ChatRequest, FunctionDeclaration, MessageResult};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Minimal chat interface used by callers that want to swap in a test double.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn send_chat(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ApiResponse<MessageResult>, ServiceError>;
}

/// Sends conversations to `/v1/chat/completions`.
///
/// The public fields are sampling settings copied into every request.
#[derive(Debug, Clone)]
pub struct ChatService {
    service: OpenAiService,
    pub model: ModelType,
    /// Number of choices to generate (`n`).
    pub choices: u32,
    pub temperature: f64,
    pub top_p: Option<f64>,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub functions: Option<Vec<FunctionDeclaration>>,
    pub user: Option<String>,
    pub stop: Option<Vec<String>>,
    pub max_tokens: Option<u32>,
    pub logit_bias: Option<BTreeMap<i64, f64>>,
}

impl ChatService {
    pub fn new(service: OpenAiService) -> Self {
        Self {
            service,
            model: ModelType::default(),
            choices: 1,
            temperature: 1.0,
            top_p: None,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            functions: None,
            user: None,
            stop: None,
            max_tokens: None,
            logit_bias: None,
        }
    }

    /// Request body for `messages` with the current settings.
    pub fn build_request(&self, messages: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest {
            messages,
            model: self.model.name().to_string(),
            functions: self.functions.clone(),
            user: self.user.clone(),
            temperature: Some(self.temperature),
            top_p: self.top_p,
            n: Some(self.choices),
            stop: self.stop.clone(),
            max_tokens: self.max_tokens,
            presence_penalty: Some(self.presence_penalty),
            frequency_penalty: Some(self.frequency_penalty),
            logit_bias: self.logit_bias.clone(),
        }
    }

    pub async fn send_chat(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ApiResponse<MessageResult>, ServiceError> {
        let body = self.build_request(messages);
        tracing::debug!(model = %body.model, messages = body.messages.len(), "sending chat");
        self.service.perform(&Endpoint::Chat, Some(&body)).await
    }
}

#[async_trait]
impl ChatApi for ChatService {
    async fn send_chat(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ApiResponse<MessageResult>, ServiceError> {
        ChatService::send_chat(self, messages).await
    }
}
