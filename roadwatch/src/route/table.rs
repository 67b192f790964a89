//! Static route table.

use super::types::{Decision, RouteSpec};
use super::decide;
use crate::session::Session;

/// The application's navigation surface.
///
/// `/admin-panel` and `/view-map` ship unguarded even though their names
/// suggest role-gating; the upstream table carries them that way and the
/// intent is ambiguous, so they are reproduced as-is rather than corrected.
const STANDARD_ROUTES: &[RouteSpec] = &[
    RouteSpec::public("/"),
    RouteSpec::public("/signup"),
    RouteSpec::public("/login"),
    RouteSpec::authenticated("/report"),
    RouteSpec::admin("/admin"),
    RouteSpec::public("/admin-panel"),
    RouteSpec::public("/view-map"),
];

/// Static configuration of guarded paths, consumed by the route guard.
///
/// The table is not user-mutable; a custom table is only ever constructed
/// from static configuration at startup.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [RouteSpec],
}

impl RouteTable {
    /// The standard RoadWatch navigation surface.
    pub fn standard() -> Self {
        Self {
            routes: STANDARD_ROUTES,
        }
    }

    /// A table over caller-supplied static configuration.
    pub fn from_static(routes: &'static [RouteSpec]) -> Self {
        Self { routes }
    }

    /// All routes in the table.
    pub fn routes(&self) -> &[RouteSpec] {
        self.routes
    }

    /// Looks up a route by its path identifier.
    pub fn find(&self, path: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Decides access for a path, or `None` when the path is not in the
    /// table. Unknown-path handling (404 or otherwise) is the dispatcher's
    /// concern, not the guard's.
    pub fn decide_path(&self, path: &str, session: &Session) -> Option<Decision> {
        self.find(path).map(|route| decide(route, session))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
