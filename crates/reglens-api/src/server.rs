//! API server lifecycle.

use reglens_core::Result;
use reglens_storage::MetricsStore;

use crate::config::ApiConfig;
use crate::routes::{AppState, router};

/// The RegLens API server.
pub struct Server {
    config: ApiConfig,
}

impl Server {
    /// Creates a server from configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Opens the store, binds the listener, and serves until shutdown.
    pub async fn run(self) -> Result<()> {
        let store = MetricsStore::open(&self.config.database_url).await?;
        let app = router(AppState { store });

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(addr = %self.config.bind_addr, "RegLens API listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}
