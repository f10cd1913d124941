//! Session and authorization manager for the MFCS portal
//!
//! Owns the current user's identity, role, verification flag, and
//! bearer token. Provides role-rank authorization, structural and
//! expiry token checks, a pluggable user directory (in-process mock
//! or remote HTTP backend), a durable session store, and axum
//! extractors that work with any state implementing `FromRef<S>` for
//! `AuthBackend`.

mod authorize;
mod backend;
mod claims;
mod config;
mod directory;
mod error;
mod extractors;
mod mock;
mod remote;
mod session;
mod types;

pub mod token;

pub use authorize::authorize;
pub use backend::AuthBackend;
pub use claims::SessionClaims;
pub use config::AuthConfig;
pub use directory::{DirectoryFactory, UserDirectory};
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser};
pub use mock::MockDirectory;
pub use remote::RemoteDirectory;
pub use session::{SessionManager, SessionStore};
pub use types::{
    Identity, LoginSession, PendingRegistration, RegistrationReceipt, RegistrationRequest,
    RegistrationStatus, ReviewAction, Role,
};
