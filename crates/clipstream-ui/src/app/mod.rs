//! App root: store wiring, routing, and cross-cutting callbacks.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, clear_token, load_token};
use crate::components::login_prompt::LoginPrompt;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, close_modal, trigger_engagement};
use crate::core::ui::ModalKind;
use crate::features::account::api::fetch_me;
use crate::features::account::view::{SignInPage, SignUpPage};
use crate::features::engagement::api::dispatch_toggle;
use crate::features::engagement::state::{EngagementKind, TriggerDecision, resolve_toggle};
use crate::features::inquiries::view::{InquiriesPage, InquiryDetailPage};
use crate::features::videos::view::{HomePage, VideoDetailPage};
use crate::models::{Toast, ToastKind};
use crate::services::error::ApiError;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;
pub(crate) mod routes;

use routes::Route;

#[function_component(ClipstreamApp)]
fn clipstream_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);

    let viewer = use_selector(|store: &AppStore| store.session.user.clone());
    let modal = use_selector(|store: &AppStore| store.modal);

    // Restore the persisted session on boot.
    {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                if let Some(token) = load_token() {
                    api_ctx.client.set_token(Some(token.clone()));
                    let client = api_ctx.client.clone();
                    let dispatch = dispatch.clone();
                    yew::platform::spawn_local(async move {
                        match fetch_me(&client).await {
                            Ok(user) => dispatch.reduce_mut(|store| {
                                store.session.establish(token, user);
                            }),
                            Err(_) => {
                                client.set_token(None);
                                clear_token();
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };

    // One trigger path for both engagement surfaces: the store applies
    // the speculative write synchronously, the network call is the only
    // suspension point, and resolution reconciles against the store.
    let on_engagement = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |kind: EngagementKind| {
            let mut decision = TriggerDecision::Ignored;
            dispatch.reduce_mut(|store| {
                decision = trigger_engagement(store, kind);
            });
            if let TriggerDecision::Dispatch(pending) = decision {
                let client = api_ctx.client.clone();
                let dispatch = dispatch.clone();
                let toasts = toasts.clone();
                let toast_id = toast_id.clone();
                yew::platform::spawn_local(async move {
                    let result = dispatch_toggle(&client, pending.kind, pending.subject_id).await;
                    dispatch.reduce_mut(|store| {
                        resolve_toggle(&mut store.engagement, pending, &result);
                    });
                    if let Err(err) = result {
                        console::warn!("engagement toggle failed", err.to_string());
                        push_toast(&toasts, &toast_id, ToastKind::Error, failure_notice(kind, &err));
                    }
                });
            }
        })
    };

    let on_sign_out = {
        let dispatch = dispatch.clone();
        let api_ctx = (*api_ctx).clone();
        Callback::from(move |()| {
            api_ctx.client.set_token(None);
            clear_token();
            dispatch.reduce_mut(|store| store.session.clear());
        })
    };

    let on_modal_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(|store| close_modal(store)))
    };

    let render_route = {
        let on_engagement = on_engagement.clone();
        move |route: Route| match route {
            Route::Home => html! { <HomePage /> },
            Route::VideoDetail { id } => html! {
                <VideoDetailPage video_id={id} on_engagement={on_engagement.clone()} />
            },
            Route::SignIn => html! { <SignInPage /> },
            Route::SignUp => html! { <SignUpPage /> },
            Route::Inquiries => html! { <InquiriesPage /> },
            Route::InquiryDetail { id } => html! { <InquiryDetailPage inquiry_id={id} /> },
            Route::NotFound => html! { <section class="empty">{"Page not found."}</section> },
        }
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <AppShell viewer={(*viewer).clone()} on_sign_out={on_sign_out}>
                    <Switch<Route> render={render_route} />
                </AppShell>
                {if matches!(*modal, Some(ModalKind::LoginRequired)) {
                    html! { <LoginPrompt on_dismiss={on_modal_dismiss} /> }
                } else {
                    html! {}
                }}
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn push_toast(
    toasts: &UseStateHandle<Vec<Toast>>,
    next_id: &UseStateHandle<u64>,
    kind: ToastKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast { id, message, kind });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

fn failure_notice(kind: EngagementKind, err: &ApiError) -> String {
    match kind {
        EngagementKind::Like => format!("Couldn't update like: {err}"),
        EngagementKind::Subscribe => format!("Couldn't update subscription: {err}"),
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ClipstreamApp>::with_root(root).render();
    } else {
        yew::Renderer::<ClipstreamApp>::new().render();
    }
}
