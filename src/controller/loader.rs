use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::DashboardError;
use crate::model::StatsSnapshot;

/// Where a dashboard gets its one snapshot per page load.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self) -> Result<StatsSnapshot, DashboardError>;
}

/// Reads the snapshot from a fixed stats endpoint.
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: Client,
    url: String,
}

impl HttpStatsSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    /// # Errors
    ///
    /// Will return `Err` if the request fails, the status is not a success,
    /// or the body does not parse as a `StatsSnapshot`
    async fn fetch(&self) -> Result<StatsSnapshot, DashboardError> {
        debug!(url = %self.url, "fetching stats");
        let resp = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = resp.bytes().await?;
        debug!(bytes = body.len(), "stats received");
        StatsSnapshot::from_json_slice(&body)
    }
}
