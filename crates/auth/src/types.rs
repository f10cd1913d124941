//! Identity, role, and registration types
//!
//! These carry only the fields needed for authentication and
//! authorization decisions; profile data beyond that lives with
//! whichever backend owns the user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Portal role. The hierarchy is a blunt total order: a role
/// satisfies any check whose required rank is not above its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    Buyer,
    Farmer,
}

impl Role {
    /// Numeric rank used for coarse-grained authorization.
    pub fn rank(&self) -> u8 {
        match self {
            Role::Admin => 4,
            Role::Seller => 3,
            Role::Buyer => 2,
            Role::Farmer => 1,
        }
    }

    /// Check whether this role satisfies a check requiring `required`.
    pub fn has_permission(&self, required: Role) -> bool {
        self.rank() >= required.rank()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Seller => write!(f, "seller"),
            Role::Buyer => write!(f, "buyer"),
            Role::Farmer => write!(f, "farmer"),
        }
    }
}

/// The authenticated user's record: role, verification, and the
/// bearer token issued at login. Round-trips through JSON for the
/// session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_verified: bool,
    pub token: String,
}

/// Result of a successful login: the identity (which carries the
/// access token) paired with the refresh token minted alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub user: Identity,
    pub refresh_token: String,
}

/// Fields submitted when registering a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub location: Option<String>,
    pub user_type: Role,
}

impl RegistrationRequest {
    /// Name, email, password, and phone are all required non-empty.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            return Err(AuthError::ValidationError(
                "name, email, password, and phone are required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Confirmation returned by a successful registration. Registration
/// never yields a usable session; the account stays pending until an
/// admin verifies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub message: String,
}

/// Review state of a registration awaiting admin verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Admin decision on a pending registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

/// A registration awaiting (or past) admin review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Option<String>,
    pub user_type: Role,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
}
