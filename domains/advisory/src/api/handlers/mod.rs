//! Advisory API handlers

pub mod crops;
pub mod fertilizer;
