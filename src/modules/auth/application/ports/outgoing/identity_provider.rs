use crate::auth::application::domain::entities::CurrentUser;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentityError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by an unexpected issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token has no subject")]
    MissingSubject,
}

/// Session capability of the external identity provider.
///
/// The provider owns sign-in and token issuance; this service only asks
/// "who is presenting this token?".
pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, token: &str) -> Result<CurrentUser, IdentityError>;

    fn current_user(&self, token: &str) -> Option<CurrentUser> {
        self.resolve(token).ok()
    }
}
