mod identity_config;
mod jwt_identity_provider;

pub use identity_config::IdentityConfig;
pub use jwt_identity_provider::{IdentityClaims, JwtIdentityProvider};
