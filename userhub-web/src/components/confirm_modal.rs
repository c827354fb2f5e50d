use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// Style the confirm button as a destructive action.
    #[prop_or_default]
    pub destructive: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no dialog in front of an account change. Open while mounted; the
/// backdrop cancels.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
    let tone = if props.destructive { "btn-error" } else { "btn-success" };
    let icon = if props.destructive {
        "fa-triangle-exclamation text-error"
    } else {
        "fa-circle-check text-success"
    };

    html! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box">
                <h3 class="font-bold text-lg flex items-center gap-2">
                    <i class={classes!("fa-solid", icon)}></i>
                    {&props.title}
                </h3>
                <p class="py-4">{&props.message}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_cancel.clone()}>
                        {"Cancel"}
                    </button>
                    <button class={classes!("btn", tone)} onclick={on_confirm}>
                        {&props.confirm_label}
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={on_cancel}></div>
        </div>
    }
}
