//! Catalogue and playback pages.
//!
//! # Design
//! - Pages read from the shared store and mutate it only through the
//!   slice transition functions.
//! - The engagement buttons emit a kind; the trigger flow itself is
//!   owned by the app root so every surface shares one path.

use crate::app::api::ApiCtx;
use crate::app::routes::Route;
use crate::components::avatar::Avatar;
use crate::core::store::{AppStore, install_video, unload_video};
use crate::features::engagement::state::{EngagementKind, toggle_state};
use crate::features::videos::api::{fetch_video, fetch_videos};
use crate::features::videos::state::{
    begin_catalogue_load, begin_detail_load, fail_detail, set_catalogue,
};
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const CATALOGUE_PAGE_SIZE: u32 = 24;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let catalogue = use_selector(|store: &AppStore| store.catalogue.clone());

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    dispatch.reduce_mut(|store| begin_catalogue_load(&mut store.catalogue));
                    let client = api_ctx.client.clone();
                    let dispatch = dispatch.clone();
                    yew::platform::spawn_local(async move {
                        match fetch_videos(&client, 1, CATALOGUE_PAGE_SIZE).await {
                            Ok(response) => dispatch.reduce_mut(|store| {
                                set_catalogue(&mut store.catalogue, response);
                            }),
                            Err(err) => {
                                console::warn!("catalogue fetch failed", err.to_string());
                                dispatch.reduce_mut(|store| store.catalogue.loading = false);
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    if catalogue.loading && catalogue.videos.is_empty() {
        return html! { <section class="empty">{"Loading…"}</section> };
    }
    if catalogue.videos.is_empty() {
        return html! { <section class="empty">{"No videos yet."}</section> };
    }

    html! {
        <section class="video-grid">
            {for catalogue.videos.iter().map(|video| {
                let route = Route::VideoDetail { id: video.id.to_string() };
                html! {
                    <Link<Route> classes="video-card" to={route}>
                        {match &video.thumbnail_path {
                            Some(src) => html! { <img class="thumb" src={src.clone()} alt={video.title.clone()} /> },
                            None => html! { <div class="thumb thumb-placeholder" /> },
                        }}
                        <h3 class="title">{video.title.clone()}</h3>
                        <p class="muted">{video.author.nickname.clone()}</p>
                        <p class="muted">{format!("{} views", video.view_count)}</p>
                    </Link<Route>>
                }
            })}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct VideoDetailPageProps {
    pub video_id: String,
    pub on_engagement: Callback<EngagementKind>,
}

#[function_component(VideoDetailPage)]
pub(crate) fn video_detail_page(props: &VideoDetailPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let detail = use_selector(|store: &AppStore| store.video.clone());
    let like = use_selector(|store: &AppStore| toggle_state(&store.engagement, EngagementKind::Like));
    let subscription =
        use_selector(|store: &AppStore| toggle_state(&store.engagement, EngagementKind::Subscribe));
    let viewer_id = use_selector(|store: &AppStore| store.session.viewer_id());

    let like = *like;
    let subscription = *subscription;
    let viewer_id = *viewer_id;

    let video_id = props.video_id.parse::<u64>().ok();
    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |video_id: &Option<u64>| {
                if let (Some(video_id), Some(api_ctx)) = (*video_id, api_ctx) {
                    dispatch.reduce_mut(|store| begin_detail_load(&mut store.video));
                    let client = api_ctx.client.clone();
                    let fetch_dispatch = dispatch.clone();
                    yew::platform::spawn_local(async move {
                        match fetch_video(&client, video_id).await {
                            Ok(payload) => fetch_dispatch.reduce_mut(|store| {
                                install_video(store, payload);
                            }),
                            Err(err) => fetch_dispatch.reduce_mut(|store| {
                                fail_detail(&mut store.video, err.to_string());
                            }),
                        }
                    });
                }
                move || dispatch.reduce_mut(|store| unload_video(store))
            },
            video_id,
        );
    }

    if detail.loading {
        return html! { <section class="empty">{"Loading…"}</section> };
    }
    let Some(video) = detail.video.as_ref() else {
        return html! { <section class="empty">{"Video not found."}</section> };
    };

    let is_owner = viewer_id.is_some_and(|id| video.is_owned_by(id));
    let on_like = {
        let on_engagement = props.on_engagement.clone();
        Callback::from(move |_| on_engagement.emit(EngagementKind::Like))
    };
    let on_subscribe = {
        let on_engagement = props.on_engagement.clone();
        Callback::from(move |_| on_engagement.emit(EngagementKind::Subscribe))
    };

    html! {
        <section class="watch">
            <div class="player">
                <video src={video.video_path.clone()} controls={true} autoplay={true} />
            </div>
            <h1 class="title">{video.title.clone()}</h1>
            <div class="watch-bar">
                <div class="channel">
                    <Avatar
                        nickname={video.author.nickname.clone()}
                        src={video.author.profile_image.clone().map(AttrValue::from)}
                    />
                    <div>
                        <p class="nickname">{video.author.nickname.clone()}</p>
                        <p class="muted">
                            {format!("{} subscribers", subscription.map_or(0, |state| state.count))}
                        </p>
                    </div>
                    // Viewers cannot subscribe to their own channel.
                    {if is_owner {
                        html! {}
                    } else {
                        let subscribed = subscription.is_some_and(|state| state.active);
                        html! {
                            <button
                                class={classes!("pill", subscribed.then_some("active"))}
                                onclick={on_subscribe}
                            >
                                {if subscribed { "Subscribed" } else { "Subscribe" }}
                            </button>
                        }
                    }}
                </div>
                <div class="reactions">
                    {{
                        let liked = like.is_some_and(|state| state.active);
                        html! {
                            <button
                                class={classes!("pill", liked.then_some("active"))}
                                onclick={on_like}
                            >
                                {format!("Like · {}", like.map_or(0, |state| state.count))}
                            </button>
                        }
                    }}
                </div>
            </div>
            {if let Some(description) = &video.description {
                html! { <p class="description">{description.clone()}</p> }
            } else {
                html! {}
            }}
        </section>
    }
}
