use chatbridge_core::{Config, OllamaClient};

/// Long-lived per-process state: immutable configuration plus the Ollama
/// client. Constructed once at startup; requests share it behind an `Arc`
/// and never mutate it.
pub struct AppState {
    pub config: Config,
    pub ollama: OllamaClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ollama = OllamaClient::new(config.ollama.host.clone());
        Self { config, ollama }
    }
}
