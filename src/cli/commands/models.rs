//! The models command: list what the Ollama daemon serves locally.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::ollama::OllamaClient;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let client = OllamaClient::new(&config.s1_model, &config.ollama)?;
    let models = client
        .list_models()
        .await
        .context("Failed to list models from Ollama")?;

    if models.is_empty() {
        println!("No models available. Pull one with 'ollama pull <model>'.");
        return Ok(());
    }

    println!("Available models:");
    for model in models {
        println!("  {model}");
    }
    Ok(())
}
