use crate::{
    models::app_state::AppState,
    pages::{Feedback, bind_input},
    session::SessionHandle,
    validation::{validate_confirm_password, validate_email, validate_full_name, validate_password},
};
use shared::models::{Identity, UpdateProfileRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let identity = use_selector(|state: &AppState| state.session.identity().cloned());

    match (*identity).clone() {
        Some(identity) => html! {
            <div class="p-4 space-y-6">
                <h1 class="text-2xl font-bold">{"Profile"}</h1>
                <IdentityCard identity={identity.clone()} />
                <div class="grid gap-6 md:grid-cols-2">
                    <EditProfileForm {identity} />
                    <ChangePasswordForm />
                </div>
            </div>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct IdentityProps {
    identity: Identity,
}

#[function_component(IdentityCard)]
fn identity_card(props: &IdentityProps) -> Html {
    let identity = &props.identity;
    let last_login = identity
        .last_login
        .as_ref()
        .map_or_else(|| "Never".to_string(), |at| at.long_date());

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body flex-row items-center gap-4">
                <div class="avatar placeholder">
                    <div class="bg-primary text-primary-content w-16 rounded-full">
                        <span class="text-xl">{identity.initials()}</span>
                    </div>
                </div>
                <div class="space-y-1">
                    <h2 class="card-title">{&identity.full_name}</h2>
                    <p class="text-sm text-base-content/70">{&identity.email}</p>
                    <div class="flex gap-2">
                        <span class="badge badge-outline">{identity.role.to_string()}</span>
                        <span class="badge badge-ghost">{identity.status.as_str()}</span>
                    </div>
                    <p class="text-xs text-base-content/60">
                        {format!("Member since {} · Last login {last_login}", identity.created_at.long_date())}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[function_component(EditProfileForm)]
fn edit_profile_form(props: &IdentityProps) -> Html {
    let full_name = use_state(|| props.identity.full_name.clone());
    let email = use_state(|| props.identity.email.clone());
    let feedback = use_state(|| None::<Feedback>);
    let saving = use_state(|| false);
    let session = use_context::<SessionHandle>();

    let onsubmit = {
        let full_name = full_name.clone();
        let email = email.clone();
        let feedback = feedback.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let fields = UpdateProfileRequest {
                full_name: full_name.trim().to_string(),
                email: email.trim().to_string(),
            };
            let checked = validate_full_name(&fields.full_name).and_then(|()| validate_email(&fields.email));
            if let Err(err) = checked {
                feedback.set(Some(Feedback::Failure(err.to_string())));
                return;
            }
            let Some(session) = session.clone() else {
                return;
            };

            saving.set(true);
            let feedback = feedback.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match session.update_profile(&fields).await {
                    Ok(_) => feedback.set(Some(Feedback::Success("Profile updated".to_string()))),
                    Err(err) => feedback.set(Feedback::from_error(&err)),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <form class="card bg-base-100 shadow" onsubmit={onsubmit} novalidate=true>
            <div class="card-body space-y-2">
                <h3 class="card-title text-lg">{"Edit profile"}</h3>
                {Feedback::render((*feedback).as_ref())}
                <div class="form-control">
                    <label class="label" for="profile-name">
                        <span class="label-text">{"Full name"}</span>
                    </label>
                    <input
                        id="profile-name"
                        class="input input-bordered"
                        type="text"
                        value={(*full_name).clone()}
                        oninput={bind_input(&full_name)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="profile-email">
                        <span class="label-text">{"Email"}</span>
                    </label>
                    <input
                        id="profile-email"
                        class="input input-bordered"
                        type="email"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                </div>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" type="submit" disabled={*saving}>
                        {if *saving { "Saving..." } else { "Save changes" }}
                    </button>
                </div>
            </div>
        </form>
    }
}

#[function_component(ChangePasswordForm)]
fn change_password_form() -> Html {
    let current = use_state(String::new);
    let next = use_state(String::new);
    let confirm = use_state(String::new);
    let feedback = use_state(|| None::<Feedback>);
    let saving = use_state(|| false);
    let session = use_context::<SessionHandle>();

    let onsubmit = {
        let current = current.clone();
        let next = next.clone();
        let confirm = confirm.clone();
        let feedback = feedback.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let current_value = (*current).clone();
            let next_value = (*next).clone();
            if current_value.is_empty() {
                feedback.set(Some(Feedback::Failure("Current password is required".to_string())));
                return;
            }
            let checked = validate_password(&next_value)
                .and_then(|()| validate_confirm_password(&confirm, &next_value));
            if let Err(err) = checked {
                feedback.set(Some(Feedback::Failure(err.to_string())));
                return;
            }
            let Some(session) = session.clone() else {
                return;
            };

            saving.set(true);
            let feedback = feedback.clone();
            let saving = saving.clone();
            let (current, next, confirm) = (current.clone(), next.clone(), confirm.clone());
            spawn_local(async move {
                match session.change_password(&current_value, &next_value).await {
                    Ok(()) => {
                        current.set(String::new());
                        next.set(String::new());
                        confirm.set(String::new());
                        feedback.set(Some(Feedback::Success("Password changed".to_string())));
                    }
                    Err(err) => feedback.set(Feedback::from_error(&err)),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <form class="card bg-base-100 shadow" onsubmit={onsubmit} novalidate=true>
            <div class="card-body space-y-2">
                <h3 class="card-title text-lg">{"Change password"}</h3>
                {Feedback::render((*feedback).as_ref())}
                <div class="form-control">
                    <label class="label" for="current-password">
                        <span class="label-text">{"Current password"}</span>
                    </label>
                    <input
                        id="current-password"
                        class="input input-bordered"
                        type="password"
                        value={(*current).clone()}
                        oninput={bind_input(&current)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="new-password">
                        <span class="label-text">{"New password"}</span>
                    </label>
                    <input
                        id="new-password"
                        class="input input-bordered"
                        type="password"
                        value={(*next).clone()}
                        oninput={bind_input(&next)}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="confirm-new-password">
                        <span class="label-text">{"Confirm new password"}</span>
                    </label>
                    <input
                        id="confirm-new-password"
                        class="input input-bordered"
                        type="password"
                        value={(*confirm).clone()}
                        oninput={bind_input(&confirm)}
                    />
                </div>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" type="submit" disabled={*saving}>
                        {if *saving { "Updating..." } else { "Update password" }}
                    </button>
                </div>
            </div>
        </form>
    }
}
