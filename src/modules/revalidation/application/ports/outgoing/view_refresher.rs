use async_trait::async_trait;

/// Page the rendering layer rebuilds after any feed/engagement write.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ViewRefreshError {
    #[error("Refresh request failed: {0}")]
    RequestFailed(String),

    #[error("Refresh endpoint answered with status {0}")]
    UnexpectedStatus(u16),
}

/// Signals the external rendering layer that a cached view is stale.
#[async_trait]
pub trait ViewRefresher: Send + Sync {
    async fn refresh(&self, path: &str) -> Result<(), ViewRefreshError>;
}

/// Fire the refresh signal; a failed signal never fails the write that caused it.
pub async fn notify_view_refresh(refresher: &(dyn ViewRefresher + Send + Sync), path: &str) {
    if let Err(e) = refresher.refresh(path).await {
        tracing::warn!("View refresh for {} failed: {}", path, e);
    }
}
