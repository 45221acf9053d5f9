//! Sign-in and sign-up pages.

use crate::app::api::ApiCtx;
use crate::app::preferences::persist_token;
use crate::app::routes::Route;
use crate::core::store::AppStore;
use crate::features::account::api::{sign_in, sign_up};
use crate::features::account::logic::{SignInFormState, SignUpFormState, parse_gender};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

fn bind_input<S: Clone + 'static>(
    form: &UseStateHandle<S>,
    apply: impl Fn(&mut S, String) + 'static,
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        }
    })
}

#[function_component(SignInPage)]
pub(crate) fn sign_in_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let navigator = use_navigator();
    let form = use_state(SignInFormState::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! { <section class="empty">{"Missing API context."}</section> };
    };

    let on_username = bind_input(&form, |form, value| form.username = value);
    let on_password = bind_input(&form, |form, value| form.password = value);

    let submit = {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let client = api_ctx.client.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match sign_in(&client, &request).await {
                    Ok(session) => {
                        persist_token(&session.token);
                        client.set_token(Some(session.token.clone()));
                        dispatch.reduce_mut(|store| {
                            store.session.establish(session.token, session.user);
                        });
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <section class="auth-card">
            <header>
                <h1>{"Sign in"}</h1>
                <p class="muted">{"Welcome back to Clipstream."}</p>
            </header>
            <label class="stack">
                <span>{"Username"}</span>
                <input value={form.username.clone()} oninput={on_username} />
            </label>
            <label class="stack">
                <span>{"Password"}</span>
                <input type="password" value={form.password.clone()} oninput={on_password} />
            </label>
            {if let Some(message) = &*error {
                html! { <p class="error-text">{message.clone()}</p> }
            } else {
                html! {}
            }}
            <div class="actions">
                <Link<Route> classes="ghost" to={Route::SignUp}>{"Create an account"}</Link<Route>>
                <button class="solid" disabled={*busy} onclick={submit}>{"Sign in"}</button>
            </div>
        </section>
    }
}

#[function_component(SignUpPage)]
pub(crate) fn sign_up_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let form = use_state(SignUpFormState::default);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! { <section class="empty">{"Missing API context."}</section> };
    };

    let on_username = bind_input(&form, |form, value| form.username = value);
    let on_email = bind_input(&form, |form, value| form.email = value);
    let on_password = bind_input(&form, |form, value| form.password = value);
    let on_nick_name = bind_input(&form, |form, value| form.nick_name = value);
    let on_birth_date = bind_input(&form, |form, value| form.birth_date = value);
    let on_phone_number = bind_input(&form, |form, value| form.phone_number = value);
    let on_zip_code = bind_input(&form, |form, value| form.zip_code = value);
    let on_address1 = bind_input(&form, |form, value| form.address1 = value);
    let on_address2 = bind_input(&form, |form, value| form.address2 = value);
    let on_gender = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.gender = parse_gender(&select.value());
                form.set(next);
            }
        })
    };

    let submit = {
        let api_ctx = api_ctx.clone();
        let navigator = navigator.clone();
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let client = api_ctx.client.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match sign_up(&client, &request).await {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::SignIn);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <section class="auth-card">
            <header>
                <h1>{"Create your account"}</h1>
                <p class="muted">{"Join Clipstream."}</p>
            </header>
            <h3 class="section-title">{"Account"}</h3>
            <label class="stack">
                <span>{"Username"}</span>
                <input value={form.username.clone()} oninput={on_username} />
            </label>
            <label class="stack">
                <span>{"Email"}</span>
                <input type="email" value={form.email.clone()} oninput={on_email} />
            </label>
            <label class="stack">
                <span>{"Password"}</span>
                <input type="password" value={form.password.clone()} oninput={on_password} />
            </label>
            <label class="stack">
                <span>{"Nickname"}</span>
                <input value={form.nick_name.clone()} oninput={on_nick_name} />
            </label>
            <h3 class="section-title">{"Profile"}</h3>
            <label class="stack">
                <span>{"Birth date"}</span>
                <input type="date" value={form.birth_date.clone()} oninput={on_birth_date} />
            </label>
            <label class="stack">
                <span>{"Phone number"}</span>
                <input type="tel" value={form.phone_number.clone()} oninput={on_phone_number} />
            </label>
            <label class="stack">
                <span>{"Gender"}</span>
                <select onchange={on_gender}>
                    <option value="MALE" selected={form.gender.as_str() == "MALE"}>{"Male"}</option>
                    <option value="FEMALE" selected={form.gender.as_str() == "FEMALE"}>{"Female"}</option>
                </select>
            </label>
            <h3 class="section-title">{"Address"}</h3>
            <label class="stack">
                <span>{"Zip code"}</span>
                <input value={form.zip_code.clone()} oninput={on_zip_code} />
            </label>
            <label class="stack">
                <span>{"Address"}</span>
                <input value={form.address1.clone()} oninput={on_address1} />
            </label>
            <label class="stack">
                <span>{"Address detail (optional)"}</span>
                <input value={form.address2.clone()} oninput={on_address2} />
            </label>
            {if let Some(message) = &*error {
                html! { <p class="error-text">{message.clone()}</p> }
            } else {
                html! {}
            }}
            <div class="actions">
                <Link<Route> classes="ghost" to={Route::SignIn}>{"I already have an account"}</Link<Route>>
                <button class="solid" disabled={*busy} onclick={submit}>{"Sign up"}</button>
            </div>
        </section>
    }
}
