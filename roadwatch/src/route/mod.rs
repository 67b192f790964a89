//! Navigation access control
//!
//! Maps (requested route, session) to an allow-or-redirect decision. The
//! guard is a pure function: the navigation dispatcher calls [`decide`]
//! before rendering a target view, and again whenever the session changes.
//! Decisions are never cached.

mod table;
mod types;

pub use table::RouteTable;
pub use types::{Decision, RouteSpec, HOME_PATH, LOGIN_PATH};

use crate::session::Session;

/// Decides whether a navigation to `route` is allowed for `session`.
///
/// The checks run in a fixed order: the authentication requirement is
/// evaluated strictly before the admin requirement, so an anonymous visitor
/// to an admin view is sent to the login page, not the home page.
///
/// Total over all inputs; an absent session is a normal input, not an error.
pub fn decide(route: &RouteSpec, session: &Session) -> Decision {
    if route.require_auth && !session.is_authenticated() {
        return Decision::RedirectTo(LOGIN_PATH);
    }
    if route.require_admin && !session.is_admin() {
        return Decision::RedirectTo(HOME_PATH);
    }
    Decision::Allow
}
