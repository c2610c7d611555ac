//! Role-based route access decisions.
//!
//! The portal front end wraps protected screens in a guard that asks
//! [`check_route`] what to do with the current session. The answer is a
//! plain enum so callers can render a spinner, the screen, or a
//! redirect without re-deriving the rules.

use slateport_models::roles::Role;

use crate::Session;

/// The guard's verdict for a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Hydration has not finished; render nothing yet.
    Loading,
    /// The session may view the route.
    Granted,
    /// Nobody is signed in.
    RedirectToLogin,
    /// Signed in, but the active role is not allowed here. Send the
    /// user to their own dashboard instead.
    RedirectToDashboard(Role),
}

/// Decides access for a route restricted to `allowed` roles.
///
/// An empty `allowed` slice means any authenticated user may enter.
/// The check never runs before hydration settles: a loading session
/// yields [`RouteAccess::Loading`] so the caller can hold rendering
/// instead of bouncing a signed-in user to the login page.
#[must_use]
pub fn check_route(session: &Session, allowed: &[Role]) -> RouteAccess {
    if session.loading {
        return RouteAccess::Loading;
    }
    if session.user.is_none() {
        return RouteAccess::RedirectToLogin;
    }
    if allowed.is_empty() || allowed.contains(&session.role) {
        RouteAccess::Granted
    } else {
        RouteAccess::RedirectToDashboard(session.role)
    }
}

/// The landing route for a role, e.g. `/student/dashboard`.
#[must_use]
pub fn dashboard_path(role: Role) -> String {
    format!("/{}/dashboard", role.as_str())
}
