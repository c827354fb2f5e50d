use shared::models::Identity;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Cached identity from the last visit, shown while it is re-verified.
    #[prop_or_default]
    pub placeholder: Option<Identity>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <i class="fas fa-users text-primary"></i>
                    <span>{"UserHub"}</span>
                </div>
                if let Some(identity) = &props.placeholder {
                    <div class="mt-2 text-sm text-base-content/70">
                        {format!("Welcome back, {}", identity.full_name)}
                    </div>
                }
                <div class="mt-3 flex items-center">
                    <span class="loading loading-spinner loading-sm mr-2"></span>
                    <span>{"Loading"}</span>
                </div>
            </div>
        </div>
    }
}
