//! Support inquiry pages.
//!
//! # Design
//! - Keep API calls in the feature page controllers.
//! - Drive rendering from the shared store list/detail slices.
//! - Use explicit form state to avoid implicit mutations.

use crate::app::api::ApiCtx;
use crate::app::routes::Route;
use crate::core::store::AppStore;
use crate::features::inquiries::api::{
    create_inquiry, delete_inquiry, delete_inquiry_answer, fetch_inquiries, fetch_inquiry,
    update_inquiry,
};
use crate::features::inquiries::state::{
    InquiryFormState, begin_list_load, clear_answer, clear_selected, remove, set_page,
    set_selected, upsert,
};
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const LIST_PAGE_SIZE: u32 = 10;

fn load_page(dispatch: &Dispatch<AppStore>, api_ctx: &ApiCtx, page: u32) {
    dispatch.reduce_mut(|store| begin_list_load(&mut store.inquiries));
    let client = api_ctx.client.clone();
    let dispatch = dispatch.clone();
    yew::platform::spawn_local(async move {
        match fetch_inquiries(&client, page, LIST_PAGE_SIZE).await {
            Ok(response) => dispatch.reduce_mut(|store| {
                set_page(&mut store.inquiries, response);
            }),
            Err(err) => {
                console::warn!("inquiry list fetch failed", err.to_string());
                dispatch.reduce_mut(|store| store.inquiries.loading = false);
            }
        }
    });
}

#[function_component(InquiriesPage)]
pub(crate) fn inquiries_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let inquiries = use_selector(|store: &AppStore| store.inquiries.clone());
    let form = use_state(InquiryFormState::default);
    let error = use_state(|| None as Option<String>);
    let saving = use_state(|| false);

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    load_page(&dispatch, &api_ctx, 1);
                }
                || ()
            },
            (),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! { <section class="empty">{"Missing API context."}</section> };
    };

    let on_title = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.set(InquiryFormState {
                    title: input.value(),
                    content: form.content.clone(),
                });
            }
        })
    };
    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                form.set(InquiryFormState {
                    title: form.title.clone(),
                    content: area.value(),
                });
            }
        })
    };

    let on_submit = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let form = form.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            let request = match form.to_create_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            saving.set(true);
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let form = form.clone();
            let error = error.clone();
            let saving = saving.clone();
            yew::platform::spawn_local(async move {
                match create_inquiry(&client, &request).await {
                    Ok(created) => {
                        dispatch.reduce_mut(|store| upsert(&mut store.inquiries, created));
                        form.set(InquiryFormState::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let pager = {
        let page = inquiries.page;
        let total_pages = inquiries.total_pages;
        let go = |target: u32| {
            let dispatch = dispatch.clone();
            let api_ctx = api_ctx.clone();
            Callback::from(move |_| load_page(&dispatch, &api_ctx, target))
        };
        if total_pages > 1 {
            html! {
                <div class="pager">
                    <button class="ghost" disabled={page <= 1} onclick={go(page.saturating_sub(1))}>
                        {"Previous"}
                    </button>
                    <span class="muted">{format!("Page {page} of {total_pages}")}</span>
                    <button class="ghost" disabled={page >= total_pages} onclick={go(page + 1)}>
                        {"Next"}
                    </button>
                </div>
            }
        } else {
            html! {}
        }
    };

    html! {
        <section class="inquiries">
            <div class="panel">
                <header class="panel-head">
                    <h1>{"Support inquiries"}</h1>
                    <span class="pill subtle">{inquiries.total}</span>
                </header>
                {if inquiries.items.is_empty() && !inquiries.loading {
                    html! { <p class="muted">{"No inquiries yet."}</p> }
                } else {
                    html! {
                        <ul class="inquiry-list">
                            {for inquiries.items.iter().map(|inquiry| {
                                let route = Route::InquiryDetail { id: inquiry.id.to_string() };
                                html! {
                                    <li>
                                        <Link<Route> classes="inquiry-row" to={route}>
                                            <span class="title">{inquiry.title.clone()}</span>
                                            <span class={classes!("pill", inquiry.is_answered.then_some("active"))}>
                                                {if inquiry.is_answered { "Answered" } else { "Waiting" }}
                                            </span>
                                            <span class="muted">
                                                {inquiry.created_at.format("%Y-%m-%d").to_string()}
                                            </span>
                                        </Link<Route>>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }}
                {pager}
            </div>
            <div class="panel">
                <header class="panel-head">
                    <h2>{"New inquiry"}</h2>
                </header>
                <label class="stack">
                    <span>{"Title"}</span>
                    <input value={form.title.clone()} oninput={on_title} />
                </label>
                <label class="stack">
                    <span>{"Content"}</span>
                    <textarea value={form.content.clone()} oninput={on_content} />
                </label>
                {if let Some(message) = &*error {
                    html! { <p class="error-text">{message.clone()}</p> }
                } else {
                    html! {}
                }}
                <div class="actions">
                    <button class="solid" disabled={*saving} onclick={on_submit}>{"Submit"}</button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct InquiryDetailPageProps {
    pub inquiry_id: String,
}

#[function_component(InquiryDetailPage)]
pub(crate) fn inquiry_detail_page(props: &InquiryDetailPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let selected = use_selector(|store: &AppStore| store.inquiries.selected.clone());
    let editing = use_state(|| false);
    let form = use_state(InquiryFormState::default);
    let error = use_state(|| None as Option<String>);

    let inquiry_id = props.inquiry_id.parse::<u64>().ok();
    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |inquiry_id: &Option<u64>| {
                if let (Some(inquiry_id), Some(api_ctx)) = (*inquiry_id, api_ctx) {
                    let client = api_ctx.client.clone();
                    let fetch_dispatch = dispatch.clone();
                    yew::platform::spawn_local(async move {
                        match fetch_inquiry(&client, inquiry_id).await {
                            Ok(inquiry) => fetch_dispatch.reduce_mut(|store| {
                                set_selected(&mut store.inquiries, inquiry);
                            }),
                            Err(err) => {
                                console::warn!("inquiry fetch failed", err.to_string());
                            }
                        }
                    });
                }
                move || dispatch.reduce_mut(|store| clear_selected(&mut store.inquiries))
            },
            inquiry_id,
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! { <section class="empty">{"Missing API context."}</section> };
    };
    let Some(inquiry) = (*selected).clone() else {
        return html! { <section class="empty">{"Loading…"}</section> };
    };

    let start_edit = {
        let editing = editing.clone();
        let form = form.clone();
        let error = error.clone();
        let entry = inquiry.clone();
        Callback::from(move |_| {
            form.set(InquiryFormState::from_entry(&entry));
            error.set(None);
            editing.set(true);
        })
    };
    let cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };
    let on_title = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.set(InquiryFormState {
                    title: input.value(),
                    content: form.content.clone(),
                });
            }
        })
    };
    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                form.set(InquiryFormState {
                    title: form.title.clone(),
                    content: area.value(),
                });
            }
        })
    };

    let save_edit = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let editing = editing.clone();
        let form = form.clone();
        let error = error.clone();
        let id = inquiry.id;
        Callback::from(move |_| {
            let request = match form.to_update_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let editing = editing.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                match update_inquiry(&client, id, &request).await {
                    Ok(updated) => {
                        dispatch.reduce_mut(|store| upsert(&mut store.inquiries, updated));
                        editing.set(false);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let delete = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let error = error.clone();
        let id = inquiry.id;
        Callback::from(move |_| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                match delete_inquiry(&client, id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| remove(&mut store.inquiries, id));
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Inquiries);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let delete_answer = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let error = error.clone();
        let id = inquiry.id;
        Callback::from(move |_| {
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                match delete_inquiry_answer(&client, id).await {
                    Ok(()) => dispatch.reduce_mut(|store| clear_answer(&mut store.inquiries, id)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    html! {
        <section class="inquiry-detail">
            <div class="panel">
                {if *editing {
                    html! {
                        <>
                            <label class="stack">
                                <span>{"Title"}</span>
                                <input value={form.title.clone()} oninput={on_title} />
                            </label>
                            <label class="stack">
                                <span>{"Content"}</span>
                                <textarea value={form.content.clone()} oninput={on_content} />
                            </label>
                            <div class="actions">
                                <button class="ghost" onclick={cancel_edit}>{"Cancel"}</button>
                                <button class="solid" onclick={save_edit}>{"Save"}</button>
                            </div>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <header class="panel-head">
                                <h1>{inquiry.title.clone()}</h1>
                                <span class="muted">
                                    {inquiry.created_at.format("%Y-%m-%d").to_string()}
                                </span>
                            </header>
                            <p class="content">{inquiry.content.clone()}</p>
                            <div class="actions">
                                <button class="ghost" onclick={start_edit}>{"Edit"}</button>
                                <button class="ghost danger" onclick={delete}>{"Delete"}</button>
                            </div>
                        </>
                    }
                }}
                {if let Some(message) = &*error {
                    html! { <p class="error-text">{message.clone()}</p> }
                } else {
                    html! {}
                }}
            </div>
            {if inquiry.is_answered {
                html! {
                    <div class="panel answer">
                        <header class="panel-head">
                            <h2>{"Answer"}</h2>
                            {if let Some(answered_at) = inquiry.answered_at {
                                html! {
                                    <span class="muted">
                                        {answered_at.format("%Y-%m-%d").to_string()}
                                    </span>
                                }
                            } else {
                                html! {}
                            }}
                        </header>
                        <p class="content">{inquiry.answer.clone().unwrap_or_default()}</p>
                        <div class="actions">
                            <button class="ghost danger" onclick={delete_answer}>
                                {"Delete answer"}
                            </button>
                        </div>
                    </div>
                }
            } else {
                html! {
                    <div class="panel answer">
                        <p class="muted">{"No answer yet. We'll get back to you soon."}</p>
                    </div>
                }
            }}
        </section>
    }
}
