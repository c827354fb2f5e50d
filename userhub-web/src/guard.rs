//! Role-based route guard.
//!
//! [`decide`] is the single place that maps a session and a route to what
//! the shell shows. It is a pure function of its inputs.

use shared::models::UserRole;

use crate::models::session::Session;
use crate::routes::Route;

/// What a route requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Sign-in forms: only for signed-out visitors.
    PublicOnly,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in administrators.
    Admin,
    /// The root path; always forwards somewhere.
    Landing,
    /// Paths the route table does not know.
    Fallback,
}

/// The guard's verdict for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Render,
    RedirectTo(Route),
    ShowLoading,
}

/// Decide what to show for `route` given `session`.
pub fn decide(session: &Session, route: &Route) -> Decision {
    if session.is_bootstrapping() {
        return Decision::ShowLoading;
    }

    match route.access() {
        Access::Landing => Decision::RedirectTo(landing_for(session)),
        Access::Fallback => Decision::RedirectTo(Route::Root),
        Access::PublicOnly if session.is_authenticated() => {
            Decision::RedirectTo(landing_for(session))
        }
        Access::PublicOnly => Decision::Render,
        Access::Authenticated | Access::Admin if !session.is_authenticated() => {
            Decision::RedirectTo(Route::Login)
        }
        Access::Admin if !session.is_admin() => Decision::RedirectTo(default_landing(session.role())),
        Access::Authenticated | Access::Admin => Decision::Render,
    }
}

/// Where a resolved session belongs: its role landing, or the login form.
pub fn landing_for(session: &Session) -> Route {
    match session.role() {
        Some(role) => default_landing(Some(role)),
        None => Route::Login,
    }
}

/// Role-appropriate home view.
pub fn default_landing(role: Option<UserRole>) -> Route {
    match role {
        Some(UserRole::Admin) => Route::Admin,
        _ => Route::Profile,
    }
}

/// The route to return to after signing in, when `route` sent a signed-out
/// visitor to the login form.
pub fn return_target(session: &Session, route: &Route) -> Option<Route> {
    let protected = matches!(route.access(), Access::Authenticated | Access::Admin);
    (protected && decide(session, route) == Decision::RedirectTo(Route::Login)).then_some(*route)
}
