//! Accounts API handlers

pub mod admin;
pub mod sessions;
