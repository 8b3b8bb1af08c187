//! Text completions client.

use super::OpenAiService;
use crate::error::ServiceError;
use crate::model_type::ModelType;
use crate::network::Endpoint;
use crate::types::{ApiResponse, CompletionRequest, TextResult};

/// Sends prompts to `/v1/completions`.
#[derive(Debug, Clone)]
pub struct CompletionService {
    service: OpenAiService,
    pub model: ModelType,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl CompletionService {
    pub fn new(service: OpenAiService, model: ModelType) -> Self {
        Self {
            service,
            model,
            max_tokens: None,
            temperature: None,
        }
    }

    pub async fn complete(
        &self,
        prompt: impl Into<String>,
    ) -> Result<ApiResponse<TextResult>, ServiceError> {
        let body = CompletionRequest {
            model: self.model.name().to_string(),
            prompt: prompt.into(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        self.service.perform(&Endpoint::Completions, Some(&body)).await
    }
}
