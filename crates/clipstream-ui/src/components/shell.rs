use crate::app::routes::Route;
use crate::components::avatar::Avatar;
use clipstream_api_models::UserProfile;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub viewer: Option<UserProfile>,
    pub on_sign_out: Callback<()>,
    pub children: Children,
}

/// Header/nav frame wrapped around every routed page.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let sign_out = {
        let on_sign_out = props.on_sign_out.clone();
        Callback::from(move |_| on_sign_out.emit(()))
    };

    html! {
        <div class="layout">
            <header class="topbar">
                <Link<Route> classes="brand" to={Route::Home}>{"Clipstream"}</Link<Route>>
                <nav class="nav">
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Inquiries}>{"Support"}</Link<Route>>
                </nav>
                <div class="session">
                    {match &props.viewer {
                        Some(user) => html! {
                            <>
                                <Avatar
                                    nickname={user.nickname.clone()}
                                    src={user.profile_image.clone().map(AttrValue::from)}
                                />
                                <span class="nickname">{user.nickname.clone()}</span>
                                <button class="ghost" onclick={sign_out}>{"Sign out"}</button>
                            </>
                        },
                        None => html! {
                            <Link<Route> classes="solid" to={Route::SignIn}>{"Sign in"}</Link<Route>>
                        },
                    }}
                </div>
            </header>
            <main class="content">{for props.children.iter()}</main>
        </div>
    }
}
