use crate::{
    errors::AuthError,
    models::app_state::NavigationState,
    pages::bind_input,
    routes::Route,
    session::SessionHandle,
    validation::{
        PASSWORD_REQUIREMENTS, ValidationError, validate_confirm_password, validate_email,
        validate_full_name, validate_password,
    },
};
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldErrors {
    full_name: Option<ValidationError>,
    email: Option<ValidationError>,
    password: Option<ValidationError>,
    confirm_password: Option<ValidationError>,
}

impl FieldErrors {
    fn check(full_name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            full_name: validate_full_name(full_name).err(),
            email: validate_email(email).err(),
            password: validate_password(password).err(),
            confirm_password: validate_confirm_password(confirm_password, password).err(),
        }
    }

    fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

fn field_error(error: Option<ValidationError>) -> Html {
    error.map_or_else(
        || html! {},
        |error| html! {
            <label class="label">
                <span class="label-text-alt text-error">{error.to_string()}</span>
            </label>
        },
    )
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let field_errors = use_state(FieldErrors::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let session = use_context::<SessionHandle>();
    let navigation = use_dispatch::<NavigationState>();

    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = full_name.trim().to_string();
            let email_value = email.trim().to_string();
            let password_value = (*password).clone();
            let checked = FieldErrors::check(&name_value, &email_value, &password_value, &confirm_password);
            let clean = checked.is_clean();
            field_errors.set(checked);
            if !clean {
                debug!("signup form rejected client-side");
                return;
            }
            let Some(session) = session.clone() else {
                return;
            };

            loading.set(true);
            error.set(None);
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let navigation = navigation.clone();
            spawn_local(async move {
                match session.signup(&name_value, &email_value, &password_value).await {
                    Ok(confirmation) => {
                        navigation.reduce_mut(|state| state.notice = Some(confirmation.message));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(AuthError::Superseded) => {}
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    let requirements = PASSWORD_REQUIREMENTS.iter().map(|rule| {
        let met = rule.is_met(&password);
        let (icon, tone) = if met {
            ("fa-check", "text-success")
        } else {
            ("fa-xmark", "text-base-content/60")
        };
        html! {
            <li class={classes!("text-xs", "flex", "items-center", "gap-1", tone)}>
                <i class={classes!("fa-solid", icon)}></i>
                {rule.label}
            </li>
        }
    });

    let is_busy = *loading;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{"Create an account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="full-name">
                            <span class="label-text">{"Full name"}</span>
                        </label>
                        <input
                            id="full-name"
                            class="input input-bordered"
                            type="text"
                            value={(*full_name).clone()}
                            oninput={bind_input(&full_name)}
                        />
                        {field_error(field_errors.full_name)}
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                        {field_error(field_errors.email)}
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                        {field_error(field_errors.password)}
                        <ul class="mt-2 space-y-1">
                            { for requirements }
                        </ul>
                    </div>
                    <div class="form-control">
                        <label class="label" for="confirm-password">
                            <span class="label-text">{"Confirm password"}</span>
                        </label>
                        <input
                            id="confirm-password"
                            class="input input-bordered"
                            type="password"
                            value={(*confirm_password).clone()}
                            oninput={bind_input(&confirm_password)}
                        />
                        {field_error(field_errors.confirm_password)}
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Sign up" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already registered? "}
                        <Link<Route> to={Route::Login} classes="link link-primary">{"Sign in"}</Link<Route>>
                    </p>
                </form>
            </div>
        </div>
    }
}
