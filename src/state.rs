// src/state.rs
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::persona::Persona;
use crate::services::provider::CompletionProvider;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: ServerConfig,
    pub persona: Persona,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(config: ServerConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config,
            persona: Persona::DEPLOYED,
            provider,
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }
}
