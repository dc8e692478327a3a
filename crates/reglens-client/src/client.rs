//! RegLens API client implementation.

use reqwest::Response;

use reglens_core::{AgencyMetrics, Error, HealthReport, Result};

/// Client for the RegLens metrics API.
#[derive(Debug, Clone)]
pub struct RegLensClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegLensClient {
    /// Creates a client against the given base URL
    /// (e.g. `http://localhost:8000`). A trailing slash is tolerated.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the complete agency snapshot from `GET /api/agencies`.
    pub async fn list_agencies(&self) -> Result<Vec<AgencyMetrics>> {
        let response = self.get("/api/agencies").await?;
        response
            .json::<Vec<AgencyMetrics>>()
            .await
            .map_err(|e| Error::fetch_failed(format!("malformed agency payload: {e}")))
    }

    /// Fetches the service health report from `GET /api/health`.
    pub async fn health(&self) -> Result<HealthReport> {
        let response = self.get("/api/health").await?;
        response
            .json::<HealthReport>()
            .await
            .map_err(|e| Error::fetch_failed(format!("malformed health payload: {e}")))
    }

    /// Issues one GET and treats any non-2xx status as a total failure.
    async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::fetch_failed(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch_failed(format!(
                "server returned HTTP {status} for {url}"
            )));
        }
        Ok(response)
    }
}
