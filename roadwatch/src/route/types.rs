//! Route guard type definitions

use serde::Serialize;

/// Redirect target when authentication is required but absent.
pub const LOGIN_PATH: &str = "/login";

/// Redirect target when the admin role is required but not held.
pub const HOME_PATH: &str = "/";

/// A single entry in the static route table.
///
/// Adding a new protected path to the application requires only a new entry;
/// the guard itself never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteSpec {
    /// Logical path identifier, e.g. `/report`.
    pub path: &'static str,
    /// The view requires a signed-in user.
    pub require_auth: bool,
    /// The view additionally requires the admin role.
    pub require_admin: bool,
}

impl RouteSpec {
    /// A route anyone may visit.
    pub const fn public(path: &'static str) -> Self {
        Self {
            path,
            require_auth: false,
            require_admin: false,
        }
    }

    /// A route requiring a signed-in user.
    pub const fn authenticated(path: &'static str) -> Self {
        Self {
            path,
            require_auth: true,
            require_admin: false,
        }
    }

    /// A route requiring a signed-in administrator.
    pub const fn admin(path: &'static str) -> Self {
        Self {
            path,
            require_auth: true,
            require_admin: true,
        }
    }
}

/// Outcome of a navigation access decision.
///
/// Redirects are normal control flow, not errors: an anonymous visitor to a
/// protected view is sent to the login page, an authenticated non-admin to
/// the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested view.
    Allow,
    /// Navigate to the given path instead.
    RedirectTo(&'static str),
}
