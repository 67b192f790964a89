//! Authentication session snapshot.
//!
//! The session holds the current authenticated identity, if any. Mutation is
//! entirely the responsibility of the login/signup collaborators outside this
//! crate: they replace the whole `Session` value on login, logout, and
//! signup. The route guard reads each session as a consistent snapshot at
//! decision time and never caches a derived decision.

use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular citizen: may file hazard reports.
    Citizen,
    /// Administrator: may additionally moderate reports.
    Admin,
}

/// An authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier assigned by the auth collaborator.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: Role,
}

impl User {
    /// Creates a user with the given identity and role.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}

/// The current authentication/authorization snapshot.
///
/// A role is only meaningful when a user is present: `is_admin` is always
/// false for the anonymous session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    /// The session at application start: nobody is signed in.
    pub fn anonymous() -> Self {
        Self { current_user: None }
    }

    /// A session for the given signed-in user.
    pub fn authenticated(user: User) -> Self {
        Self {
            current_user: Some(user),
        }
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// True when a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// True when the signed-in user holds the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(
            self.current_user,
            Some(User {
                role: Role::Admin,
                ..
            })
        )
    }
}
