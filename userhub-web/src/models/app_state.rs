use yewdux::Store;

use crate::models::session::Session;
use crate::routes::Route;

/// Snapshot of the session, mirrored from the session machine after every
/// committed transition so components re-render.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
}

/// Navigation memory kept across redirects.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct NavigationState {
    /// Protected route the user tried to open before being sent to login.
    pub return_to: Option<Route>,
    /// One-shot notice shown on the login form, e.g. after signing up.
    pub notice: Option<String>,
    /// Set by an explicit sign-out. The guard's redirect of the page being
    /// left must not become the next user's return target.
    pub signed_out: bool,
}

impl NavigationState {
    /// Remember `route` for after sign-in, unless the visitor just signed
    /// out.
    pub fn remember_return(&mut self, route: Route) {
        if !self.signed_out {
            self.return_to = Some(route);
        }
    }

    /// Drop everything remembered for the user who just signed out, so the
    /// next sign-in on this tab starts from its own landing page.
    pub fn forget_user(&mut self) {
        self.return_to = None;
        self.notice = None;
        self.signed_out = true;
    }

    /// Reset after a successful sign-in.
    pub fn signed_in(&mut self) {
        *self = Self::default();
    }
}
