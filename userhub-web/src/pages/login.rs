use crate::{
    errors::AuthError,
    guard::default_landing,
    models::app_state::NavigationState,
    pages::bind_input,
    routes::Route,
    session::SessionHandle,
    validation::validate_login,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let session = use_context::<SessionHandle>();
    let (navigation, navigation_dispatch) = use_store::<NavigationState>();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigation_dispatch = navigation_dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = email_handle.trim().to_string();
            let password_value = (*password_handle).clone();
            if let Err(err) = validate_login(&email_value, &password_value) {
                error_handle.set(Some(err.to_string()));
                return;
            }
            let Some(session) = session.clone() else {
                return;
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let navigation_dispatch = navigation_dispatch.clone();
            spawn_local(async move {
                match session.login(&email_value, &password_value).await {
                    Ok(identity) => {
                        let return_to = navigation_dispatch.get().return_to;
                        navigation_dispatch.reduce_mut(NavigationState::signed_in);
                        let target =
                            return_to.unwrap_or_else(|| default_landing(Some(identity.role)));
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&target);
                        }
                    }
                    Err(AuthError::Superseded) => {}
                    Err(err) => error_ref.set(Some(err.user_message())),
                }
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;
    let disable_submit = email.is_empty() || password.is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in"}</h2>
                    if let Some(notice) = &navigation.notice {
                        <div class="alert alert-success">
                            <span>{notice.clone()}</span>
                        </div>
                    }
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"No account yet? "}
                        <Link<Route> to={Route::Signup} classes="link link-primary">{"Sign up"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
