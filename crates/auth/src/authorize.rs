//! Authorization gate
//!
//! Decides whether an identity may perform an action requiring a
//! role. A missing identity is unauthenticated; a sufficient rank is
//! still denied when the account is unverified.

use crate::error::AuthError;
use crate::types::{Identity, Role};

/// Allow or deny an action requiring `required`.
///
/// Checks in order: authentication, role rank, verification. An
/// unverified account is never granted role-gated access, whatever
/// its rank.
pub fn authorize(identity: Option<&Identity>, required: Role) -> Result<(), AuthError> {
    let identity = identity.ok_or(AuthError::Unauthenticated)?;

    if !identity.role.has_permission(required) {
        return Err(AuthError::InsufficientRole);
    }

    if !identity.is_verified {
        return Err(AuthError::NotVerified);
    }

    Ok(())
}
