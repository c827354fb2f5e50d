mod api;
mod app;
mod components;
mod config;
mod containers;
mod directory;
mod errors;
mod guard;
mod models;
mod pages;
mod routes;
mod session;
mod store;
mod telemetry;
mod validation;

#[cfg(test)]
mod directory_test;
#[cfg(test)]
mod guard_test;
#[cfg(test)]
mod routes_test;

use app::App;
use config::WebConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    let config = WebConfig::new();
    telemetry::init(config.tracing_level());
    tracing::info!(api = %config.resolved_api_base_url(), "starting UserHub");

    // Mounts onto <body>
    Renderer::<Root>::new().render();
}
