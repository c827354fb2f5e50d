//! Tests for the routing system
//!
//! Validates route paths, path recognition, and navbar metadata.

#[cfg(test)]
mod tests {
    use crate::routes::Route;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Root.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Signup.to_path(), "/signup");
        assert_eq!(Route::Profile.to_path(), "/profile");
        assert_eq!(Route::Admin.to_path(), "/admin");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    /// Tests path recognition including unknown paths
    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/profile"), Some(Route::Profile));
        assert_eq!(Route::recognize("/admin"), Some(Route::Admin));
        assert_eq!(Route::recognize("/nowhere/at/all"), Some(Route::NotFound));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    /// Tests that every route recognizes its own path
    #[test]
    fn test_paths_round_trip() {
        for route in Route::iter().filter(|route| *route != Route::Root) {
            assert_eq!(Route::recognize(&route.to_path()), Some(route), "{route:?}");
        }
    }

    /// Tests navbar labels
    #[test]
    fn test_route_labels() {
        assert_eq!(Route::Profile.label(), Some("Profile"));
        assert_eq!(Route::Admin.label(), Some("Users"));
        assert_eq!(Route::Login.label(), None);
        assert_eq!(Route::NotFound.label(), None);
    }
}
