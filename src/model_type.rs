//! Model identifiers grouped by family.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A model identifier, either a known family member or an arbitrary name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelType {
    Chat(ChatModel),
    Codex(CodexModel),
    Feature(FeatureModel),
    Embedding(EmbeddingModel),
    /// Any model name not covered by the families above.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatModel {
    Gpt35Turbo,
    Gpt35Turbo16k,
    Gpt4,
    Gpt4_32k,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodexModel {
    Davinci,
    Cushman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureModel {
    DavinciEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingModel {
    Ada,
}

impl ChatModel {
    pub const ALL: [Self; 4] = [Self::Gpt35Turbo, Self::Gpt35Turbo16k, Self::Gpt4, Self::Gpt4_32k];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::Gpt35Turbo16k => "gpt-3.5-turbo-16k",
            Self::Gpt4 => "gpt-4",
            Self::Gpt4_32k => "gpt-4-32k",
        }
    }
}

impl CodexModel {
    pub const ALL: [Self; 2] = [Self::Davinci, Self::Cushman];

    pub fn name(self) -> &'static str {
        match self {
            Self::Davinci => "code-davinci-002",
            Self::Cushman => "code-cushman-001",
        }
    }
}

impl FeatureModel {
    pub const ALL: [Self; 1] = [Self::DavinciEdit];

    pub fn name(self) -> &'static str {
        match self {
            Self::DavinciEdit => "text-davinci-edit-001",
        }
    }
}

impl EmbeddingModel {
    pub const ALL: [Self; 1] = [Self::Ada];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ada => "text-embedding-ada-002",
        }
    }
}

impl ModelType {
    /// Wire name sent in the `model` request field.
    pub fn name(&self) -> &str {
        match self {
            Self::Chat(model) => model.name(),
            Self::Codex(model) => model.name(),
            Self::Feature(model) => model.name(),
            Self::Embedding(model) => model.name(),
            Self::Other(name) => name,
        }
    }
}

impl Default for ModelType {
    fn default() -> Self {
        Self::Chat(ChatModel::Gpt35Turbo)
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelType {
    type Err = Infallible;

    /// Known names map to their family; anything else becomes `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(model) = ChatModel::ALL.into_iter().find(|m| m.name() == name) {
            return Ok(Self::Chat(model));
        }
        if let Some(model) = CodexModel::ALL.into_iter().find(|m| m.name() == name) {
            return Ok(Self::Codex(model));
        }
        if let Some(model) = FeatureModel::ALL.into_iter().find(|m| m.name() == name) {
            return Ok(Self::Feature(model));
        }
        if let Some(model) = EmbeddingModel::ALL.into_iter().find(|m| m.name() == name) {
            return Ok(Self::Embedding(model));
        }
        Ok(Self::Other(name.to_string()))
    }
}

impl From<ChatModel> for ModelType {
    fn from(model: ChatModel) -> Self {
        Self::Chat(model)
    }
}
