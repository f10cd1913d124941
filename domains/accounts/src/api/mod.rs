//! HTTP API layer for the Accounts domain

pub mod handlers;
pub mod middleware;
pub mod routes;
