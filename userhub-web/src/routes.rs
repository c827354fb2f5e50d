use crate::{
    components::loading::Loading,
    containers::layout::Layout,
    guard::{Access, Decision, decide, return_target},
    models::app_state::{AppState, NavigationState},
    pages::*,
};
use strum::EnumIter;
use tracing::debug;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

/// The route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/profile")]
    Profile,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// What the route requires of the session.
    pub const fn access(self) -> Access {
        match self {
            Self::Root => Access::Landing,
            Self::Login | Self::Signup => Access::PublicOnly,
            Self::Profile => Access::Authenticated,
            Self::Admin => Access::Admin,
            Self::NotFound => Access::Fallback,
        }
    }

    /// Navigation label, for routes that appear in the navbar.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Profile => Some("Profile"),
            Self::Admin => Some("Users"),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteViewProps {
    pub route: Route,
}

/// Renders one route through the guard.
#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let navigation = use_dispatch::<NavigationState>();
    let route = props.route;
    let decision = decide(&session, &route);

    {
        let target = return_target(&session, &route);
        use_effect_with(target, move |target| {
            if let Some(target) = *target {
                navigation.reduce_mut(|state| state.remember_return(target));
            }
            || ()
        });
    }

    debug!(?route, ?decision, "routing");
    match decision {
        Decision::ShowLoading => html! {
            <Loading placeholder={session.placeholder().cloned()} />
        },
        Decision::RedirectTo(target) => html! { <Redirect<Route> to={target} /> },
        Decision::Render => render_page(route),
    }
}

fn render_page(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Profile => html! {
            <Layout current_route={route}>
                <ProfilePage />
            </Layout>
        },
        Route::Admin => html! {
            <Layout current_route={route}>
                <AdminPage />
            </Layout>
        },
        Route::Root | Route::NotFound => html! {},
    }
}

/// Switch function for the route table.
pub fn switch(route: Route) -> Html {
    html! { <RouteView {route} /> }
}
