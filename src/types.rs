//! Data model for the OpenAI chat and text completion APIs.
//!
//! These types serialize/deserialize directly to/from the JSON payloads the
//! API expects. Optional request fields are omitted when unset.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Message roles
// ---------------------------------------------------------------------------

/// Conversation participant role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction message.
    System,
    /// End-user message.
    User,
    /// Assistant/model message.
    Assistant,
    /// Result of a function the assistant asked to call.
    Function,
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A single message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Author role for this conversation turn.
    pub role: Role,

    /// Text content. Absent when the assistant message is purely a function call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Function call requested by the assistant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            function_call: None,
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// The function name and JSON-encoded arguments the model asked to call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded string of the arguments object.
    pub arguments: String,
}

// ---------------------------------------------------------------------------
// Function declarations (sent in requests)
// ---------------------------------------------------------------------------

/// One argument of a declared function.
///
/// Only `type` and `description` go on the wire; `name` becomes the key in
/// the parameters object and `required` feeds the declaration's required list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArgument {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub required: bool,
}

impl FunctionArgument {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            required,
        }
    }
}

impl Serialize for FunctionArgument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", &self.kind)?;
        map.serialize_entry("description", &self.description)?;
        map.end()
    }
}

/// A function the model may choose to call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    parameters: FunctionParameters,
    required: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct FunctionParameters {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: BTreeMap<String, FunctionArgument>,
}

impl FunctionDeclaration {
    /// Declare a function from its argument list.
    ///
    /// Later arguments with a duplicate name replace earlier ones in
    /// `properties`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        arguments: Vec<FunctionArgument>,
    ) -> Self {
        let required = arguments
            .iter()
            .filter(|arg| arg.required)
            .map(|arg| arg.name.clone())
            .collect();
        let properties = arguments
            .into_iter()
            .map(|arg| (arg.name.clone(), arg))
            .collect();
        Self {
            name: name.into(),
            description: description.into(),
            parameters: FunctionParameters {
                kind: "object",
                properties,
            },
            required,
        }
    }

    /// Names of the arguments marked required, in declaration order.
    pub fn required(&self) -> &[String] {
        &self.required
    }
}

// ---------------------------------------------------------------------------
// Chat completion request
// ---------------------------------------------------------------------------

/// Request body for POST /v1/chat/completions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionDeclaration>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    /// Number of choices to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,

    /// Token id to bias. Keys serialize as JSON strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<BTreeMap<i64, f64>>,
}

impl ChatRequest {
    /// A request with only the required fields set.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: model.into(),
            functions: None,
            user: None,
            temperature: None,
            top_p: None,
            n: None,
            stop: None,
            max_tokens: None,
            presence_penalty: None,
            frequency_penalty: None,
            logit_bias: None,
        }
    }
}

/// Request body for POST /v1/completions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Generic completion response envelope. `T` is the per-choice payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Option<Vec<T>>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ApiResponse<MessageResult> {
    /// Content of the first choice's message, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_deref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}

/// One chat completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResult {
    #[serde(default)]
    pub message: Option<ChatMessage>,
    #[serde(default)]
    pub index: Option<u32>,
    /// Provider stop reason (`stop`, `length`, `function_call`, ...).
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// One text completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextResult {
    pub text: String,
}

/// Token usage reported by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    pub total_tokens: u64,
}

/// Response body for GET /v1/models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelList {
    #[serde(default)]
    pub object: Option<String>,
    pub data: Vec<ModelInfo>,
}

/// Response body for GET /v1/models/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub owned_by: Option<String>,
}

// ---------------------------------------------------------------------------
// Error envelope
// ---------------------------------------------------------------------------

/// Structured error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

/// Fields of the API error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
