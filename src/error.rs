use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DashboardError {
    #[error("network error: {0}")]
    Network(String),
    #[error("schema error: {0}")]
    Schema(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Schema(err.to_string())
    }
}

impl From<&str> for DashboardError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
