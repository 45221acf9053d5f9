use crate::app::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoginPromptProps {
    pub on_dismiss: Callback<()>,
}

/// Modal shown when a signed-out viewer tries a members-only action.
#[function_component(LoginPrompt)]
pub(crate) fn login_prompt(props: &LoginPromptProps) -> Html {
    let navigator = use_navigator();

    let go_sign_in = {
        let navigator = navigator.clone();
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| {
            on_dismiss.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::SignIn);
            }
        })
    };
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class="card">
                <header>
                    <h3>{"Sign in required"}</h3>
                </header>
                <p class="muted">
                    {"Sign in to like videos and subscribe to channels."}
                </p>
                <div class="actions">
                    <button class="ghost" onclick={dismiss}>{"Not now"}</button>
                    <button class="solid" onclick={go_sign_in}>{"Sign in"}</button>
                </div>
            </div>
        </div>
    }
}
