//! Tests for the route guard
//!
//! Every property is checked over the full route table so a new route cannot
//! slip past the loading and sign-in rules.

#[cfg(test)]
mod tests {
    use shared::models::UserRole;
    use strum::IntoEnumIterator;

    use crate::api::test_implementations::identity;
    use crate::guard::{Access, Decision, decide, default_landing, landing_for, return_target};
    use crate::models::session::Session;
    use crate::routes::Route;

    fn admin() -> Session {
        Session::authenticated(identity(UserRole::Admin))
    }

    fn user() -> Session {
        Session::authenticated(identity(UserRole::User))
    }

    fn all_sessions() -> Vec<Session> {
        vec![
            Session::bootstrapping(),
            Session::unauthenticated(),
            user(),
            admin(),
        ]
    }

    #[test]
    fn test_bootstrapping_always_shows_loading() {
        let pending = [
            Session::bootstrapping(),
            Session::bootstrapping().with_placeholder(identity(UserRole::Admin)),
            Session::bootstrapping().with_identity(Some(identity(UserRole::Admin))),
        ];
        for session in &pending {
            for route in Route::iter() {
                assert_eq!(decide(session, &route), Decision::ShowLoading, "{route:?}");
            }
        }
    }

    #[test]
    fn test_unauthenticated_protected_routes_go_to_login() {
        let session = Session::unauthenticated();
        assert_eq!(decide(&session, &Route::Admin), Decision::RedirectTo(Route::Login));
        assert_eq!(decide(&session, &Route::Profile), Decision::RedirectTo(Route::Login));
        assert_eq!(decide(&session, &Route::Admin), decide(&session, &Route::Profile));
    }

    #[test]
    fn test_unauthenticated_public_routes_render() {
        let session = Session::unauthenticated();
        assert_eq!(decide(&session, &Route::Login), Decision::Render);
        assert_eq!(decide(&session, &Route::Signup), Decision::Render);
    }

    #[test]
    fn test_user_is_kept_out_of_admin() {
        let session = user();
        assert_eq!(decide(&session, &Route::Admin), Decision::RedirectTo(Route::Profile));
        assert_eq!(decide(&session, &Route::Profile), Decision::Render);
    }

    #[test]
    fn test_admin_renders_everything_protected() {
        let session = admin();
        assert_eq!(decide(&session, &Route::Admin), Decision::Render);
        assert_eq!(decide(&session, &Route::Profile), Decision::Render);
    }

    #[test]
    fn test_authenticated_users_skip_auth_forms() {
        assert_eq!(decide(&user(), &Route::Login), Decision::RedirectTo(Route::Profile));
        assert_eq!(decide(&user(), &Route::Signup), Decision::RedirectTo(Route::Profile));
        assert_eq!(decide(&admin(), &Route::Login), Decision::RedirectTo(Route::Admin));
        assert_eq!(decide(&admin(), &Route::Signup), Decision::RedirectTo(Route::Admin));
    }

    #[test]
    fn test_root_resolves_by_session() {
        assert_eq!(
            decide(&Session::unauthenticated(), &Route::Root),
            Decision::RedirectTo(Route::Login)
        );
        assert_eq!(decide(&user(), &Route::Root), Decision::RedirectTo(Route::Profile));
        assert_eq!(decide(&admin(), &Route::Root), Decision::RedirectTo(Route::Admin));
    }

    #[test]
    fn test_unknown_paths_go_to_root() {
        for session in all_sessions().iter().filter(|s| !s.is_bootstrapping()) {
            assert_eq!(decide(session, &Route::NotFound), Decision::RedirectTo(Route::Root));
        }
    }

    #[test]
    fn test_redirect_chains_terminate_in_render() {
        for session in all_sessions().iter().filter(|s| !s.is_bootstrapping()) {
            for start in Route::iter() {
                let mut route = start;
                let mut hops = 0;
                while let Decision::RedirectTo(next) = decide(session, &route) {
                    route = next;
                    hops += 1;
                    assert!(hops <= 3, "redirect loop starting at {start:?}");
                }
                assert_eq!(decide(session, &route), Decision::Render);
            }
        }
    }

    #[test]
    fn test_decide_is_deterministic() {
        for session in all_sessions() {
            for route in Route::iter() {
                assert_eq!(decide(&session, &route), decide(&session.clone(), &route));
            }
        }
    }

    #[test]
    fn test_landings() {
        assert_eq!(landing_for(&Session::unauthenticated()), Route::Login);
        assert_eq!(landing_for(&user()), Route::Profile);
        assert_eq!(landing_for(&admin()), Route::Admin);
        assert_eq!(default_landing(None), Route::Profile);
    }

    #[test]
    fn test_return_target_only_for_protected_routes() {
        let signed_out = Session::unauthenticated();
        assert_eq!(return_target(&signed_out, &Route::Admin), Some(Route::Admin));
        assert_eq!(return_target(&signed_out, &Route::Profile), Some(Route::Profile));
        assert_eq!(return_target(&signed_out, &Route::Root), None);
        assert_eq!(return_target(&signed_out, &Route::Login), None);
        assert_eq!(return_target(&Session::bootstrapping(), &Route::Admin), None);
        assert_eq!(return_target(&user(), &Route::Admin), None);
    }

    #[test]
    fn test_route_access_table() {
        assert_eq!(Route::Root.access(), Access::Landing);
        assert_eq!(Route::Login.access(), Access::PublicOnly);
        assert_eq!(Route::Signup.access(), Access::PublicOnly);
        assert_eq!(Route::Profile.access(), Access::Authenticated);
        assert_eq!(Route::Admin.access(), Access::Admin);
        assert_eq!(Route::NotFound.access(), Access::Fallback);
    }
}
