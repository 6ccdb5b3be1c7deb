mod logging_refresher;
mod webhook_refresher;

pub use logging_refresher::LoggingViewRefresher;
pub use webhook_refresher::WebhookViewRefresher;
