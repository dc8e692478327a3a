//! API server configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8000`.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// SQLite database URL backing the metrics store.
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_database_url() -> String {
    "sqlite:data/reglens.db".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: default_database_url(),
        }
    }
}
