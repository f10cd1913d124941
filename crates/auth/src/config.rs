//! Authentication configuration

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Lifetime of issued tokens, in seconds
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, token_ttl_secs: u64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_secs,
        }
    }
}
