//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Talk to the OpenAI completion API from the terminal.
#[derive(Debug, Parser)]
#[command(name = "openai-kit", version)]
pub struct Args {
    /// Path to config file (default: ./openai-kit.toml or ~/.config/openai-kit/openai-kit.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override model name.
    #[arg(short = 'm', long = "model", global = true)]
    pub model: Option<String>,

    /// Override API base URL.
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one chat message and print the reply.
    Chat {
        prompt: String,
        /// System instruction placed before the prompt.
        #[arg(long)]
        system: Option<String>,
        #[arg(long)]
        temperature: Option<f64>,
        #[arg(long = "max-tokens")]
        max_tokens: Option<u32>,
    },
    /// Run a plain text completion. Chat models are replaced by gpt-3.5-turbo-instruct.
    Complete {
        prompt: String,
        #[arg(long = "max-tokens")]
        max_tokens: Option<u32>,
    },
    /// List available model ids.
    Models,
    /// Show one model.
    Model { id: String },
}
