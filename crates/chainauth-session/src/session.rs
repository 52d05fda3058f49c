//! User profiles and explicit session context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account.
    #[default]
    User,
    /// Administrative account.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// Who is logged in, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider-assigned identifier.
    pub id: Uuid,
    /// Account name; also the actor recorded in the ledger.
    pub username: String,
    /// Contact address, if known.
    pub email: Option<String>,
    /// Account role.
    pub role: Role,
    /// When this login happened.
    pub last_login: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile for a regular user logging in now.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: None,
            role: Role::User,
            last_login: Utc::now(),
        }
    }

    /// Set the contact address.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// An authenticated session.
///
/// Handed out by the [`Authenticator`](crate::Authenticator) and passed back
/// explicitly for every action taken on the user's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Unique session identifier.
    pub session_id: Uuid,
    /// The logged-in user.
    pub user: UserProfile,
    /// When the session began.
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Start a session for `user`.
    #[must_use]
    pub fn new(user: UserProfile) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            user,
            started_at: Utc::now(),
        }
    }

    /// The actor name written to the ledger.
    #[must_use]
    pub fn actor(&self) -> &str {
        &self.user.username
    }

    /// Short session identifier for display.
    #[must_use]
    pub fn short_id(&self) -> String {
        self.session_id.to_string()[..8].to_string()
    }

    /// Create a tracing span carrying this session.
    #[must_use]
    pub fn span(&self) -> tracing::Span {
        tracing::info_span!(
            "session",
            session_id = %self.session_id,
            user = %self.user.username,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = UserProfile::new("alice");
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.role, Role::User);
        assert!(profile.email.is_none());
    }

    #[test]
    fn test_sessions_are_unique() {
        let a = SessionContext::new(UserProfile::new("alice"));
        let b = SessionContext::new(UserProfile::new("alice"));
        assert_ne!(a.session_id, b.session_id);
        assert_eq!(a.actor(), "alice");
        assert_eq!(a.short_id().len(), 8);
    }

    #[test]
    fn test_role_serialization() {
        let profile = UserProfile::new("root").with_role(Role::Admin);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"role\":\"admin\""));
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
