use async_trait::async_trait;

use crate::revalidation::application::ports::outgoing::{ViewRefreshError, ViewRefresher};

/// Used when no rendering layer is configured to receive refresh signals.
#[derive(Debug, Clone, Default)]
pub struct LoggingViewRefresher;

#[async_trait]
impl ViewRefresher for LoggingViewRefresher {
    async fn refresh(&self, path: &str) -> Result<(), ViewRefreshError> {
        tracing::debug!("View refresh requested for {} (no endpoint configured)", path);
        Ok(())
    }
}
