use std::fmt;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::application::{
    domain::entities::{CurrentUser, UserId},
    ports::outgoing::{IdentityError, IdentityProvider},
};

use super::identity_config::IdentityConfig;

/// Claims the identity provider puts in its session tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

#[derive(Clone)]
pub struct JwtIdentityProvider {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtIdentityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtIdentityProvider")
            .field("config", &"IdentityConfig")
            .finish()
    }
}

impl JwtIdentityProvider {
    pub fn new(config: IdentityConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        if let Some(issuer) = config.issuer.as_deref() {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            validation,
        }
    }
}

impl IdentityProvider for JwtIdentityProvider {
    fn resolve(&self, token: &str) -> Result<CurrentUser, IdentityError> {
        let decoded = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Identity token rejected: expired");
                        IdentityError::TokenExpired
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::warn!("Identity token rejected: invalid signature");
                        IdentityError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Identity token rejected: unexpected issuer");
                        IdentityError::InvalidIssuer
                    }
                    _ => {
                        tracing::debug!("Identity token rejected: {}", e);
                        IdentityError::MalformedToken
                    }
                }
            })?;

        let claims = decoded.claims;
        if claims.sub.trim().is_empty() {
            return Err(IdentityError::MissingSubject);
        }

        Ok(CurrentUser {
            id: UserId::from(claims.sub),
            name: claims.name.filter(|n| !n.trim().is_empty()),
        })
    }
}
