// halalscreen-core/src/infrastructure/session.rs

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::session::{Session, User};
use crate::error::HalalScreenError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// JSON-file persistence for the local [`Session`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means nobody is signed in.
    pub fn load(&self) -> Result<Session, HalalScreenError> {
        if !self.path.exists() {
            debug!(path = ?self.path, "No session file");
            return Ok(Session::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&content).map_err(InfrastructureError::JsonError)?;
        Ok(session)
    }

    pub fn sign_in(&self, email: &str, name: &str) -> Result<Session, HalalScreenError> {
        let session = Session::signed_in(User::new(email, name, Utc::now())?);
        self.save(&session)?;
        info!(user = %email, "Signed in");
        Ok(session)
    }

    pub fn sign_out(&self) -> Result<(), HalalScreenError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("Signed out");
        }
        Ok(())
    }

    fn save(&self, session: &Session) -> Result<(), HalalScreenError> {
        let json = serde_json::to_string_pretty(session).map_err(InfrastructureError::JsonError)?;
        atomic_write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_signed_out_by_default() -> Result<()> {
        let dir = tempdir()?;
        let store = SessionStore::new(dir.path().join(".halalscreen/session.json"));
        assert!(!store.load()?.is_authenticated());
        // Signing out twice is harmless
        store.sign_out()?;
        Ok(())
    }

    #[test]
    fn test_sign_in_persists_and_sign_out_clears() -> Result<()> {
        let dir = tempdir()?;
        let store = SessionStore::new(dir.path().join(".halalscreen/session.json"));

        let session = store.sign_in("user@example.com", "Demo User")?;
        let reloaded = store.load()?;
        assert_eq!(reloaded, session);
        assert_eq!(reloaded.require_user()?.email, "user@example.com");

        store.sign_out()?;
        assert!(!store.path().exists());
        assert_eq!(store.load()?.require_user(), Err(DomainError::NotSignedIn));
        Ok(())
    }

    #[test]
    fn test_invalid_email_does_not_write() -> Result<()> {
        let dir = tempdir()?;
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.sign_in("nope", "Demo").is_err());
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    fn test_corrupt_session_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json")?;
        assert!(matches!(
            SessionStore::new(&path).load(),
            Err(HalalScreenError::Infrastructure(InfrastructureError::JsonError(_)))
        ));
        Ok(())
    }
}
