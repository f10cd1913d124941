//! Accounts domain: login, registration, token introspection, and
//! admin verification of pending registrations.

pub mod api;

pub use api::middleware::AccountsState;
pub use api::routes::routes;
