//! Model listing and lookup client.

use super::OpenAiService;
use crate::error::ServiceError;
use crate::network::Endpoint;
use crate::types::{ModelInfo, ModelList};

#[derive(Debug, Clone)]
pub struct ModelsService {
    service: OpenAiService,
}

impl ModelsService {
    pub fn new(service: OpenAiService) -> Self {
        Self { service }
    }

    /// GET `/v1/models`.
    pub async fn list(&self) -> Result<ModelList, ServiceError> {
        self.service.perform(&Endpoint::Models, None).await
    }

    /// GET `/v1/models/{id}`.
    pub async fn retrieve(&self, id: &str) -> Result<ModelInfo, ServiceError> {
        self.service
            .perform(&Endpoint::Model(id.to_string()), None)
            .await
    }
}
