use crate::config::WebConfig;
use crate::errors::AuthError;
use crate::models::app_state::AppState;
use crate::routes::{Route, switch};
use crate::session::{SessionHandle, WebSession};
use tracing::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_state(|| SessionHandle::new(WebSession::from_config(&WebConfig::new())));
    let dispatch = use_dispatch::<AppState>();

    {
        let session = (*session).clone();
        use_effect_with((), move |_| {
            session.subscribe(move |snapshot| {
                dispatch.set(AppState {
                    session: snapshot.clone(),
                });
            });
            spawn_local(async move {
                match session.bootstrap().await {
                    Ok(()) => debug!(authenticated = session.is_authenticated(), "bootstrap complete"),
                    Err(AuthError::AlreadyBootstrapped) => debug!("bootstrap already ran"),
                    Err(err) => error!(error = %err, "bootstrap failed"),
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionHandle> context={(*session).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionHandle>>
    }
}
