//! HTTP API layer for the Advisory domain

pub mod handlers;
pub mod routes;
