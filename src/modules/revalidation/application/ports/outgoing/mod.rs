pub mod view_refresher;

pub use view_refresher::{notify_view_refresh, ViewRefreshError, ViewRefresher, DASHBOARD_PATH};
