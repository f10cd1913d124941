//! Advisory domain: crop recommendation and fertilizer calculation
//! over the rule engine.

pub mod api;

pub use api::routes::routes;
