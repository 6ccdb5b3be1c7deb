use actix_web::web;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::{CurrentUser, UserId},
    ports::outgoing::{IdentityError, IdentityProvider},
};

/// Identity provider that ignores the token and returns a fixed answer.
#[derive(Debug, Clone)]
pub struct StubIdentityProvider {
    result: Result<CurrentUser, IdentityError>,
}

impl StubIdentityProvider {
    pub fn user(id: &str, name: Option<&str>) -> Self {
        Self {
            result: Ok(CurrentUser {
                id: UserId::from(id),
                name: name.map(str::to_string),
            }),
        }
    }

    pub fn rejecting(error: IdentityError) -> Self {
        Self { result: Err(error) }
    }
}

impl IdentityProvider for StubIdentityProvider {
    fn resolve(&self, _token: &str) -> Result<CurrentUser, IdentityError> {
        self.result.clone()
    }
}

pub fn identity_data(
    provider: impl IdentityProvider + Send + Sync + 'static,
) -> web::Data<Arc<dyn IdentityProvider + Send + Sync>> {
    let provider: Arc<dyn IdentityProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
