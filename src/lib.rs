//! openai-kit — typed access to the OpenAI text/chat completion API.
//!
//! Each call builds an authenticated request for one endpoint, sends it, and
//! decodes the JSON reply into either the expected payload or the API's own
//! error envelope.
//!
//! # Quick start
//!
//! ```no_run
//! use openai_kit::service::{ChatService, OpenAiService};
//! use openai_kit::types::ChatMessage;
//!
//! # async fn example() {
//! let chat = ChatService::new(OpenAiService::new("sk-..."));
//! let response = chat.send_chat(vec![ChatMessage::user("Hello!")]).await.unwrap();
//! println!("{}", response.first_content().unwrap_or_default());
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model_type;
pub mod network;
pub mod service;
#[cfg(test)]
pub(crate) mod testsupport;
pub mod types;

pub use error::{ConfigError, NetworkError, ServiceError};
pub use model_type::ModelType;
pub use service::{ChatService, CompletionService, ModelsService, OpenAiService};
