// halalscreen-core/src/domain/session.rs
//
// Explicit sign-in context. Use cases that need a user receive a `Session` value;
// nothing here is global.

use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The email doubles as the local user id: there is a single local account.
    pub fn new(email: &str, name: &str, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        let email = email.trim().to_lowercase();
        let user = Self {
            id: email.clone(),
            email,
            name: name.trim().to_string(),
            created_at,
        };
        user.validate().map_err(|e| DomainError::InvalidInput {
            field: "user".to_string(),
            reason: e.to_string(),
        })?;
        Ok(user)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn require_user(&self) -> Result<&User, DomainError> {
        self.user.as_ref().ok_or(DomainError::NotSignedIn)
    }
}
