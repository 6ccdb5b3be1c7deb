use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::UserId;

/// Account as mirrored from the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
