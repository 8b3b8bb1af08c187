//! CLI entry point for openai-kit.

mod cli;

use clap::Parser;
use cli::{Args, Command};
use openai_kit::config::{load_config, ClientConfig};
use openai_kit::service::{ChatApi, ChatService, CompletionService, ModelsService, OpenAiService};
use openai_kit::types::{ApiResponse, ChatMessage, MessageResult, TextResult};
use openai_kit::ModelType;
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Used by `complete` when the configured model only serves chat.
const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";

#[tokio::main]
async fn main() {
    init_tracing();
    let args = Args::parse();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    apply_cli_overrides(&mut config, &args);

    if let Err(e) = run(&config, args.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_cli_overrides(config: &mut ClientConfig, args: &Args) {
    if let Some(model) = &args.model {
        config.model = model.parse().unwrap_or_default();
    }
    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
}

async fn run(config: &ClientConfig, command: Command) -> Result<(), Box<dyn Error>> {
    let service = OpenAiService::from_config(config)?;
    match command {
        Command::Chat {
            prompt,
            system,
            temperature,
            max_tokens,
        } => {
            let mut chat = ChatService::new(service);
            chat.model = config.model.clone();
            if let Some(temperature) = temperature {
                chat.temperature = temperature;
            }
            chat.max_tokens = max_tokens;
            let reply = run_chat(&chat, system, prompt).await?;
            println!("{reply}");
        }
        Command::Complete { prompt, max_tokens } => {
            let mut completions = CompletionService::new(service, completion_model(&config.model));
            completions.max_tokens = max_tokens;
            let response = completions.complete(prompt).await?;
            println!("{}", render_completion(&response));
        }
        Command::Models => {
            let list = ModelsService::new(service).list().await?;
            for model in list.data {
                println!("{}", model.id);
            }
        }
        Command::Model { id } => {
            let info = ModelsService::new(service).retrieve(&id).await?;
            let owner = info.owned_by.as_deref().unwrap_or("-");
            println!("{}\towned_by={owner}", info.id);
        }
    }
    Ok(())
}

/// `/v1/completions` rejects chat models, so those fall back to an instruct model.
fn completion_model(configured: &ModelType) -> ModelType {
    match configured {
        ModelType::Chat(chat) => {
            tracing::debug!(model = chat.name(), "chat model not valid for completions");
            ModelType::Other(DEFAULT_COMPLETION_MODEL.to_string())
        }
        other => other.clone(),
    }
}

async fn run_chat(
    api: &dyn ChatApi,
    system: Option<String>,
    prompt: String,
) -> Result<String, Box<dyn Error>> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(prompt));
    let response = api.send_chat(messages).await?;
    Ok(render_chat(&response))
}

/// Assistant text of the first choice, or the function call it requested.
fn render_chat(response: &ApiResponse<MessageResult>) -> String {
    let Some(message) = response
        .choices
        .as_deref()
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.message.as_ref())
    else {
        return String::new();
    };
    if let Some(content) = &message.content {
        return content.clone();
    }
    message
        .function_call
        .as_ref()
        .map(|call| format!("[function_call] {}({})", call.name, call.arguments))
        .unwrap_or_default()
}

fn render_completion(response: &ApiResponse<TextResult>) -> String {
    response
        .choices
        .as_deref()
        .and_then(|choices| choices.first())
        .map(|choice| choice.text.trim().to_string())
        .unwrap_or_default()
}
