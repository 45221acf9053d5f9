//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Cross-slice transitions (binding a video, running an engagement
//!   trigger) live here so the store is the only writer coordinator.

use crate::core::auth::SessionSlice;
use crate::core::ui::ModalKind;
use crate::features::engagement::state::{
    EngagementKind, EngagementState, TriggerDecision, begin_toggle, bind_video, unbind,
};
use crate::features::inquiries::state::InquiriesState;
use crate::features::videos::state::{VideoDetailState, VideoListState, clear_detail, set_detail};
use clipstream_api_models::VideoDetail;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Session/auth state for the current viewer.
    pub session: SessionSlice,
    /// Catalogue page backing the home grid.
    pub catalogue: VideoListState,
    /// Detail state for the video being watched.
    pub video: VideoDetailState,
    /// Optimistic toggle state bound to the watched video.
    pub engagement: EngagementState,
    /// Support inquiry list/detail state.
    pub inquiries: InquiriesState,
    /// Modal requested by the interaction layer, when any.
    pub modal: Option<ModalKind>,
}

/// Open a modal surface.
pub const fn open_modal(store: &mut AppStore, kind: ModalKind) {
    store.modal = Some(kind);
}

/// Dismiss the active modal, if any.
pub const fn close_modal(store: &mut AppStore) {
    store.modal = None;
}

/// Install a fetched video detail and bind its engagement surfaces.
pub fn install_video(store: &mut AppStore, detail: VideoDetail) {
    bind_video(&mut store.engagement, &detail);
    set_detail(&mut store.video, detail);
}

/// Tear down the detail view and its engagement binding.
pub fn unload_video(store: &mut AppStore) {
    unbind(&mut store.engagement);
    clear_detail(&mut store.video);
}

/// Run the engagement trigger path against the whole store.
///
/// Opens the login prompt when the viewer is signed out; otherwise the
/// returned decision tells the caller whether a remote call must be
/// dispatched.
pub fn trigger_engagement(store: &mut AppStore, kind: EngagementKind) -> TriggerDecision {
    let decision = begin_toggle(&mut store.engagement, &store.session, kind);
    if matches!(decision, TriggerDecision::LoginRequired) {
        store.modal = Some(ModalKind::LoginRequired);
    }
    decision
}

#[cfg(test)]
mod tests {
    use super::{
        AppStore, close_modal, install_video, open_modal, trigger_engagement, unload_video,
    };
    use crate::core::ui::ModalKind;
    use crate::features::engagement::state::{EngagementKind, TriggerDecision};
    use chrono::{TimeZone, Utc};
    use clipstream_api_models::{UserProfile, VideoAuthor, VideoDetail};

    fn detail() -> VideoDetail {
        VideoDetail {
            id: 7,
            title: "Sea otters".to_string(),
            description: None,
            video_path: "/media/7.mp4".to_string(),
            view_count: 420,
            like_count: 10,
            is_liked: false,
            subscriber_count: 200,
            is_subscribed: false,
            created_at: Utc.timestamp_millis_opt(0).unwrap(),
            author: VideoAuthor {
                id: 3,
                nickname: "otterchannel".to_string(),
                profile_image: None,
            },
        }
    }

    fn signed_in(store: &mut AppStore) {
        store.session.establish(
            "tok".to_string(),
            UserProfile {
                id: 9,
                nickname: "viewer".to_string(),
                email: "viewer@example.com".to_string(),
                profile_image: None,
            },
        );
    }

    #[test]
    fn install_binds_engagement_and_detail() {
        let mut store = AppStore::default();
        install_video(&mut store, detail());
        assert_eq!(store.video.video.as_ref().map(|video| video.id), Some(7));
        assert_eq!(store.engagement.like.map(|entry| entry.subject_id), Some(7));
        assert_eq!(
            store.engagement.subscription.map(|entry| entry.subject_id),
            Some(3)
        );
        unload_video(&mut store);
        assert!(store.video.video.is_none());
        assert!(store.engagement.like.is_none());
    }

    #[test]
    fn signed_out_trigger_opens_login_prompt_only() {
        let mut store = AppStore::default();
        install_video(&mut store, detail());
        let engagement_before = store.engagement;
        let decision = trigger_engagement(&mut store, EngagementKind::Like);
        assert_eq!(decision, TriggerDecision::LoginRequired);
        assert_eq!(store.modal, Some(ModalKind::LoginRequired));
        assert_eq!(store.engagement, engagement_before);
    }

    #[test]
    fn signed_in_trigger_dispatches_without_modal() {
        let mut store = AppStore::default();
        install_video(&mut store, detail());
        signed_in(&mut store);
        let decision = trigger_engagement(&mut store, EngagementKind::Like);
        assert!(matches!(decision, TriggerDecision::Dispatch(_)));
        assert!(store.modal.is_none());
    }

    #[test]
    fn modal_open_close_round_trip() {
        let mut store = AppStore::default();
        open_modal(&mut store, ModalKind::LoginRequired);
        assert_eq!(store.modal, Some(ModalKind::LoginRequired));
        close_modal(&mut store);
        assert!(store.modal.is_none());
    }
}
