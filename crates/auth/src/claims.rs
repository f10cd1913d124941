//! Session token claims

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Claims carried by minted session tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Role at issue time
    pub role: Role,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
