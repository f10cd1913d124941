//! Durable session persistence
//!
//! The session survives restarts through two entries under fixed
//! names: the raw bearer token and the JSON-serialized identity. A
//! session is restored only when both entries are present and the
//! identity parses; anything else clears the entries and starts
//! empty (fail closed).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::types::{Identity, LoginSession};

/// Fixed entry names in the session directory.
const TOKEN_ENTRY: &str = "mfcs_token";
const USER_ENTRY: &str = "mfcs_user";

/// File-backed key/value store for the persisted session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_ENTRY)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_ENTRY)
    }

    /// Write both session entries.
    pub fn persist(&self, identity: &Identity) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), &identity.token)?;
        fs::write(self.user_path(), serde_json::to_string(identity)?)?;
        Ok(())
    }

    /// Restore the persisted session, if any.
    ///
    /// Returns `None` unless both entries exist and the identity
    /// parses; corrupt entries are deleted so the next start is clean.
    pub fn restore(&self) -> Option<Identity> {
        let entries = (
            fs::read_to_string(self.token_path()),
            fs::read_to_string(self.user_path()),
        );
        let (token, user_json) = match entries {
            (Ok(token), Ok(json)) => (token, json),
            // A lone entry is as useless as a corrupt one
            _ => {
                self.clear();
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&user_json) {
            Ok(mut identity) => {
                identity.token = token;
                Some(identity)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session did not parse; clearing it");
                self.clear();
                None
            }
        }
    }

    /// Remove both session entries. Idempotent; missing entries are
    /// not an error.
    pub fn clear(&self) {
        remove_entry(&self.token_path());
        remove_entry(&self.user_path());
    }
}

fn remove_entry(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove session entry");
        }
    }
}

/// Session manager: the directory plus the durable store.
///
/// Login persists the session, logout clears it, and `current`
/// restores whatever the last process left behind.
pub struct SessionManager {
    directory: Arc<dyn UserDirectory>,
    store: SessionStore,
}

impl SessionManager {
    pub fn new(directory: Arc<dyn UserDirectory>, store: SessionStore) -> Self {
        Self { directory, store }
    }

    /// Authenticate and persist the resulting session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, AuthError> {
        let session = self.directory.login(email, password).await?;

        // Persistence is best-effort; a login should not fail because
        // the session could not be cached locally.
        if let Err(e) = self.store.persist(&session.user) {
            tracing::warn!(error = %e, "Failed to persist session");
        }

        Ok(session)
    }

    /// Clear the persisted session. Idempotent and unconditional.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// The session restored from durable storage, if one exists.
    pub fn current(&self) -> Option<Identity> {
        self.store.restore()
    }
}
