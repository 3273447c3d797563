use std::path::PathBuf;

/// Gateway configuration, fixed at startup. Nothing here mutates while the
/// server is running.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Upstream Ollama settings
    pub ollama: OllamaConfig,

    /// Directory holding the static frontend (index.html)
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Verbose logging (DEBUG env in the original deployment)
    pub debug: bool,
}

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama daemon
    pub host: String,

    /// Model used by the conversation-compaction endpoint
    pub compact_model: String,
}

fn default_port() -> u16 {
    5000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_ollama_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_compact_model() -> String {
    "granite3.2:8b".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ollama: OllamaConfig::default(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            debug: true,
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            compact_model: default_compact_model(),
        }
    }
}
