use crate::{
    api::UserHubClient,
    components::{confirm_modal::ConfirmModal, pagination::Pagination},
    config::WebConfig,
    directory::{self, StatusChange},
    errors::AuthError,
    models::app_state::AppState,
    pages::Feedback,
    session::SessionHandle,
};
use shared::models::{Identity, UserPage, UserRole, UserStatus};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// User management: paged listing with activate/deactivate.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let session = use_context::<SessionHandle>();
    let client = use_memo((), |_| UserHubClient::from_config(&WebConfig::new()));
    let own_id = use_selector(|state: &AppState| {
        state.session.identity().map(|identity| identity.id.clone())
    });
    let page = use_state(|| 1_u32);
    let reload = use_state(|| 0_u32);
    let listing = use_state(|| None::<UserPage>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<AuthError>);
    let pending = use_state(|| None::<StatusChange>);
    let busy_user = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);

    {
        let session = session.clone();
        let client = client.clone();
        let listing = listing.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((*page, *reload), move |&(page, _)| {
            if let Some(session) = session {
                loading.set(true);
                spawn_local(async move {
                    match directory::fetch_page(&*session, &*client, page).await {
                        Ok(result) => {
                            listing.set(Some(result));
                            load_error.set(None);
                        }
                        Err(AuthError::Superseded) => {}
                        Err(err) => {
                            warn!(error = %err, page, "user listing failed");
                            load_error.set(Some(err));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.set(reload.wrapping_add(1)))
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let on_toggle = {
        let pending = pending.clone();
        Callback::from(move |user: Identity| pending.set(Some(StatusChange::toggle(user))))
    };

    let on_cancel = {
        let pending = pending.clone();
        Callback::from(move |()| pending.set(None))
    };

    let on_confirm = {
        let pending = pending.clone();
        let busy_user = busy_user.clone();
        let feedback = feedback.clone();
        let reload = reload.clone();
        let session = session.clone();
        let client = client.clone();
        Callback::from(move |()| {
            let Some(change) = (*pending).clone() else {
                return;
            };
            pending.set(None);
            let Some(session) = session.clone() else {
                return;
            };
            busy_user.set(Some(change.user.id.clone()));
            feedback.set(None);
            let busy_user = busy_user.clone();
            let feedback = feedback.clone();
            let reload = reload.clone();
            let client = client.clone();
            spawn_local(async move {
                match directory::apply(&*session, &*client, &change).await {
                    Ok(()) => {
                        feedback.set(Some(Feedback::Success(change.success_message())));
                        reload.set(reload.wrapping_add(1));
                    }
                    Err(AuthError::Superseded) => {}
                    Err(err) => feedback.set(Some(Feedback::Failure(change.failure_message(&err)))),
                }
                busy_user.set(None);
            });
        })
    };

    let pagination = (*listing)
        .as_ref()
        .map(|listing| listing.pagination)
        .unwrap_or_default();

    let body = match (&*listing, &*load_error) {
        (_, Some(err)) => html! {
            <div class="alert alert-error">
                <span>{err.user_message()}</span>
                if err.is_transient() {
                    <button class="btn btn-sm" onclick={refresh.clone()}>{"Retry"}</button>
                }
            </div>
        },
        (None, None) => html! {
            <div class="flex justify-center p-8">
                <span class="loading loading-spinner loading-md"></span>
            </div>
        },
        (Some(listing), None) if listing.users.is_empty() => html! {
            <div class="text-center p-8 text-base-content/60">{"No users found"}</div>
        },
        (Some(listing), None) => html! {
            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"User"}</th>
                            <th>{"Role"}</th>
                            <th>{"Status"}</th>
                            <th>{"Created"}</th>
                            <th>{"Last Login"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for listing.users.iter().map(|user| html! {
                            <UserRow
                                key={user.id.clone()}
                                user={user.clone()}
                                is_self={own_id.as_deref() == Some(user.id.as_str())}
                                busy={busy_user.as_deref() == Some(user.id.as_str())}
                                on_toggle={on_toggle.clone()}
                            />
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    let modal = (*pending).clone().map_or_else(
        || html! {},
        |change| html! {
            <ConfirmModal
                title={change.title()}
                message={change.message()}
                confirm_label={change.label()}
                destructive={change.is_destructive()}
                on_confirm={on_confirm}
                on_cancel={on_cancel}
            />
        },
    );

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">{"User Management"}</h1>
                    <p class="text-sm text-base-content/70">
                        {format!("{} total users", pagination.total_users)}
                    </p>
                </div>
                <button class="btn btn-outline btn-sm" onclick={refresh} disabled={*loading}>
                    <i class={classes!("fa-solid", "fa-rotate", (*loading).then_some("fa-spin"))}></i>
                    {"Refresh"}
                </button>
            </div>
            {Feedback::render((*feedback).as_ref())}
            {body}
            <Pagination
                current_page={pagination.current_page}
                total_pages={pagination.total_pages}
                {on_page_change}
            />
            {modal}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UserRowProps {
    user: Identity,
    is_self: bool,
    busy: bool,
    on_toggle: Callback<Identity>,
}

#[function_component(UserRow)]
fn user_row(props: &UserRowProps) -> Html {
    let user = &props.user;
    let last_login = user
        .last_login
        .as_ref()
        .map_or_else(|| "Never".to_string(), |at| at.long_date());
    let role_badge = match user.role {
        UserRole::Admin => "badge-primary",
        UserRole::User => "badge-ghost",
    };
    let status_badge = match user.status {
        UserStatus::Active => "badge-success",
        UserStatus::Inactive => "badge-error",
    };
    let change = StatusChange::toggle(user.clone());
    let action_tone = if change.is_destructive() { "btn-error" } else { "btn-success" };
    let onclick = {
        let user = user.clone();
        props.on_toggle.reform(move |_: MouseEvent| user.clone())
    };

    html! {
        <tr>
            <td>
                <div class="flex items-center gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-neutral text-neutral-content w-10 rounded-full">
                            <span>{user.initials()}</span>
                        </div>
                    </div>
                    <div>
                        <div class="font-semibold">{&user.full_name}</div>
                        <div class="text-sm text-base-content/60">{&user.email}</div>
                    </div>
                </div>
            </td>
            <td><span class={classes!("badge", role_badge)}>{user.role.to_string()}</span></td>
            <td><span class={classes!("badge", status_badge)}>{user.status.as_str()}</span></td>
            <td>{user.created_at.long_date()}</td>
            <td>{last_login}</td>
            <td>
                if props.busy {
                    <span class="loading loading-spinner loading-sm"></span>
                } else if props.is_self {
                    <span class="text-xs text-base-content/60">{"You"}</span>
                } else {
                    <button class={classes!("btn", "btn-xs", "btn-outline", action_tone)} {onclick}>
                        {change.label()}
                    </button>
                }
            </td>
        </tr>
    }
}
