#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Shared HS256 secret used by the identity provider to sign session tokens.
    pub secret_key: String,
    /// When set, tokens must carry this `iss` claim.
    pub issuer: Option<String>,
}
