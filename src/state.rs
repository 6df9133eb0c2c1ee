// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::model_client::{ModelClient, OllamaClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub model: Arc<dyn ModelClient>,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn ModelClient>) -> Self {
        Self { config, model }
    }

    /// State wired to the Ollama instance named in `config`.
    pub fn with_ollama(config: Config) -> Self {
        let client = OllamaClient::new(config.ollama_host.clone(), config.upstream_timeout);
        Self::new(config, Arc::new(client))
    }
}
