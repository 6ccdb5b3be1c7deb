use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::revalidation::application::ports::outgoing::{ViewRefreshError, ViewRefresher};

#[derive(Serialize)]
struct RefreshRequest<'a> {
    path: &'a str,
}

/// POSTs `{"path": ...}` to the rendering layer's revalidation endpoint.
#[derive(Debug, Clone)]
pub struct WebhookViewRefresher {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookViewRefresher {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ViewRefreshError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .map_err(|e| ViewRefreshError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ViewRefresher for WebhookViewRefresher {
    async fn refresh(&self, path: &str) -> Result<(), ViewRefreshError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RefreshRequest { path })
            .send()
            .await
            .map_err(|e| ViewRefreshError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewRefreshError::UnexpectedStatus(status.as_u16()));
        }

        tracing::debug!("View refresh sent for {}", path);
        Ok(())
    }
}
