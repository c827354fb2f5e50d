mod admin;
mod login;
mod profile;
mod signup;

pub use admin::AdminPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;

use web_sys::HtmlInputElement;
use yew::{Callback, Html, InputEvent, TargetCast, UseStateHandle, html};

use crate::errors::AuthError;

/// Mirror a text input into a state handle.
pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// Outcome banner for a form or an admin action.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Feedback {
    Success(String),
    Failure(String),
}

impl Feedback {
    /// Stale results are not reported.
    pub(crate) fn from_error(err: &AuthError) -> Option<Self> {
        match err {
            AuthError::Superseded => None,
            err => Some(Self::Failure(err.user_message())),
        }
    }

    pub(crate) fn render(feedback: Option<&Self>) -> Html {
        match feedback {
            Some(Self::Success(message)) => html! {
                <div class="alert alert-success"><span>{message.clone()}</span></div>
            },
            Some(Self::Failure(message)) => html! {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            },
            None => html! {},
        }
    }
}
