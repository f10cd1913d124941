//! Mock user directory
//!
//! In-process stand-in for a real auth backend, seeded with the demo
//! accounts. Mints real HS256 tokens so the structural and expiry
//! checks exercise the same paths as a live deployment. Pending
//! registrations live behind a mutex so the directory can be shared
//! across handlers.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::token;
use crate::types::{
    Identity, LoginSession, PendingRegistration, RegistrationReceipt, RegistrationRequest,
    RegistrationStatus, ReviewAction, Role,
};

#[derive(Debug, Clone)]
struct MockUser {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
    is_verified: bool,
}

// Demo accounts: a verified admin, a verified farmer, and an
// unverified account that must be blocked at login.
static MOCK_USERS: [MockUser; 3] = [
    MockUser {
        id: "1",
        name: "Admin User",
        email: "admin@mfcs.com",
        password: "admin123",
        role: Role::Admin,
        is_verified: true,
    },
    MockUser {
        id: "2",
        name: "Ahmad Khan",
        email: "ahmad@example.com",
        password: "farmer123",
        role: Role::Farmer,
        is_verified: true,
    },
    MockUser {
        id: "3",
        name: "Unverified User",
        email: "unverified@example.com",
        password: "test123",
        role: Role::Farmer,
        is_verified: false,
    },
];

/// Mock directory holding the demo users and pending registrations.
pub struct MockDirectory {
    config: AuthConfig,
    pending: Arc<Mutex<Vec<PendingRegistration>>>,
}

impl MockDirectory {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn find_user(&self, id: &str) -> Option<&'static MockUser> {
        MOCK_USERS.iter().find(|u| u.id == id)
    }

    fn identity_for(&self, user: &MockUser) -> Result<Identity, AuthError> {
        let mut identity = Identity {
            id: user.id.to_string(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            role: user.role,
            is_verified: user.is_verified,
            token: String::new(),
        };
        identity.token = token::issue_for(&identity, &self.config)?;
        Ok(identity)
    }

    fn lock_pending(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, Vec<PendingRegistration>>, AuthError> {
        self.pending
            .lock()
            .map_err(|e| AuthError::DirectoryUnavailable(format!("pending lock poisoned: {e}")))
    }
}

#[async_trait::async_trait]
impl UserDirectory for MockDirectory {
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        let user = MOCK_USERS
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_verified {
            tracing::info!(email = %email, "Login blocked: account not verified");
            return Err(AuthError::NotVerified);
        }

        let identity = self.identity_for(user)?;
        let refresh_token = token::refresh_for(&identity, &self.config)?;
        Ok(LoginSession {
            user: identity,
            refresh_token,
        })
    }

    async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationReceipt, AuthError> {
        request.validate()?;

        let registration = PendingRegistration {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            location: request.location,
            user_type: request.user_type,
            status: RegistrationStatus::Pending,
            registered_at: Utc::now(),
        };

        tracing::info!(email = %registration.email, "Registration queued for admin review");
        self.lock_pending()?.push(registration);

        Ok(RegistrationReceipt {
            message: "Registration successful! Your account requires admin verification \
                      before you can login."
                .to_string(),
        })
    }

    async fn verify_token(&self, bearer: &str) -> Result<Identity, AuthError> {
        let claims = token::verify(bearer, &self.config)?;

        let user = self
            .find_user(&claims.sub)
            .ok_or(AuthError::MalformedToken)?;

        if !user.is_verified {
            return Err(AuthError::NotVerified);
        }

        let mut identity = self.identity_for(user)?;
        // Introspection returns the token it was handed, not a new one
        identity.token = bearer.to_string();
        Ok(identity)
    }

    async fn refresh_token(&self, refresh: &str) -> Result<String, AuthError> {
        let claims = token::verify(refresh, &self.config)?;
        let user = self
            .find_user(&claims.sub)
            .ok_or(AuthError::MalformedToken)?;

        token::issue(user.id, user.email, user.role, &self.config)
    }

    async fn pending_registrations(
        &self,
        _admin_token: &str,
    ) -> Result<Vec<PendingRegistration>, AuthError> {
        Ok(self.lock_pending()?.clone())
    }

    async fn review_registration(
        &self,
        _admin_token: &str,
        id: &str,
        action: ReviewAction,
    ) -> Result<PendingRegistration, AuthError> {
        let mut pending = self.lock_pending()?;
        let registration = pending
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AuthError::RegistrationNotFound(id.to_string()))?;

        // Decided records are never re-reviewed
        if registration.status == RegistrationStatus::Pending {
            registration.status = match action {
                ReviewAction::Approve => RegistrationStatus::Approved,
                ReviewAction::Reject => RegistrationStatus::Rejected,
            };
            tracing::info!(id = %id, status = ?registration.status, "Registration reviewed");
        }

        Ok(registration.clone())
    }
}
