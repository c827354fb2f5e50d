use crate::{
    guard::default_landing,
    models::app_state::{AppState, NavigationState},
    routes::Route,
    session::SessionHandle,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::{use_dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let navigator = use_navigator();
    let session = use_context::<SessionHandle>();
    let identity = use_selector(|state: &AppState| state.session.identity().cloned());
    let navigation = use_dispatch::<NavigationState>();
    let Some(identity) = (*identity).clone() else {
        return html! {};
    };

    let home = default_landing(Some(identity.role));
    let links: Vec<Route> = [Route::Profile, Route::Admin]
        .into_iter()
        .filter(|route| *route != Route::Admin || identity.is_admin())
        .collect();

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        let navigator = navigator.clone();
        let navigation = navigation.clone();
        let Some(session) = session.clone() else {
            return;
        };
        spawn_local(async move {
            session.logout().await;
            navigation.reduce_mut(NavigationState::forget_user);
            if let Some(navigator) = navigator {
                navigator.push(&Route::Login);
            }
        });
    });

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<Route> to={home} classes="btn btn-ghost text-lg">
                {"UserHub"}
            </Link<Route>>
            <ul class="menu menu-horizontal gap-1">
                { for links.into_iter().map(|route| {
                    let active = if props.current_route == Some(route) { "btn-soft" } else { "" };
                    html! {
                        <li>
                            <Link<Route> to={route} classes={classes!("btn", "btn-ghost", active)}>
                                {route.label().unwrap_or_default()}
                            </Link<Route>>
                        </li>
                    }
                }) }
            </ul>
            <div class="flex items-center gap-2">
                <div class="avatar placeholder">
                    <div class="bg-neutral text-neutral-content w-8 rounded-full">
                        <span class="text-xs">{identity.initials()}</span>
                    </div>
                </div>
                <span class="text-sm text-base-content/80">{&identity.full_name}</span>
                <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                    <i class="fa-solid fa-right-from-bracket"></i>
                    {"Logout"}
                </button>
            </div>
        </nav>
    }
}
