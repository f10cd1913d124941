//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// User directory provider (`mock` for the in-process demo
    /// directory, `remote` for a real backend)
    pub directory_provider: String,

    /// Base URL of the remote auth backend (used when
    /// `directory_provider = "remote"`)
    pub api_base_url: String,

    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,

    /// Lifetime of issued session tokens, in seconds
    pub token_ttl_secs: u64,

    /// Directory holding the persisted session entries
    pub session_dir: String,

    /// Runtime configuration
    pub log_level: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let directory_provider =
            env::var("DIRECTORY_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        // The remote provider talks to a real backend and must not fall
        // back to a demo signing secret.
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if directory_provider == "mock" => "mfcs-demo-secret".to_string(),
            Err(_) => return Err(anyhow::anyhow!("JWT_SECRET is required")),
        };

        let config = Self {
            directory_provider,
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            jwt_secret,
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            session_dir: env::var("SESSION_DIR").unwrap_or_else(|_| ".mfcs".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
