//! Catalogue and detail state for videos.
//!
//! # Design
//! - Rows are shared via `Rc` so selector clones stay cheap.
//! - Avoid storing derived values that can be recomputed at render.

use clipstream_api_models::{VideoDetail, VideoListResponse, VideoSummary};
use std::rc::Rc;

/// Catalogue slice backing the home grid.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct VideoListState {
    /// Page of videos currently shown.
    pub videos: Vec<Rc<VideoSummary>>,
    /// One-based page index of the shown page.
    pub page: u32,
    /// Total pages reported by the API.
    pub total_pages: u32,
    /// Whether a catalogue fetch is outstanding.
    pub loading: bool,
}

/// Detail slice for the video being watched.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct VideoDetailState {
    /// Fetched detail payload, once loaded.
    pub video: Option<Rc<VideoDetail>>,
    /// Whether the detail fetch is outstanding.
    pub loading: bool,
    /// Fetch failure message, when the load failed.
    pub error: Option<String>,
}

/// Replace the catalogue page with a fetched response.
pub fn set_catalogue(state: &mut VideoListState, response: VideoListResponse) {
    state.videos = response.videos.into_iter().map(Rc::new).collect();
    state.page = response.page;
    state.total_pages = response.total_pages;
    state.loading = false;
}

/// Mark the catalogue as fetching.
pub const fn begin_catalogue_load(state: &mut VideoListState) {
    state.loading = true;
}

/// Mark the detail slice as fetching a new video.
pub fn begin_detail_load(state: &mut VideoDetailState) {
    state.video = None;
    state.error = None;
    state.loading = true;
}

/// Install a fetched video detail.
pub fn set_detail(state: &mut VideoDetailState, detail: VideoDetail) {
    state.video = Some(Rc::new(detail));
    state.error = None;
    state.loading = false;
}

/// Record a failed detail fetch.
pub fn fail_detail(state: &mut VideoDetailState, message: String) {
    state.video = None;
    state.error = Some(message);
    state.loading = false;
}

/// Tear down the detail slice when the view unloads.
pub fn clear_detail(state: &mut VideoDetailState) {
    state.video = None;
    state.error = None;
    state.loading = false;
}

#[cfg(test)]
mod tests {
    use super::{
        VideoDetailState, VideoListState, begin_detail_load, clear_detail, fail_detail,
        set_catalogue, set_detail,
    };
    use chrono::{TimeZone, Utc};
    use clipstream_api_models::{VideoAuthor, VideoDetail, VideoListResponse, VideoSummary};

    fn summary(id: u64) -> VideoSummary {
        VideoSummary {
            id,
            title: format!("video {id}"),
            thumbnail_path: None,
            view_count: 0,
            created_at: Utc.timestamp_millis_opt(0).unwrap(),
            author: VideoAuthor {
                id: 1,
                nickname: "channel".to_string(),
                profile_image: None,
            },
        }
    }

    fn detail() -> VideoDetail {
        VideoDetail {
            id: 7,
            title: "Sea otters".to_string(),
            description: Some("raft footage".to_string()),
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

    #[test]
    fn set_catalogue_replaces_rows_and_paging() {
        let mut state = VideoListState {
            loading: true,
            ..VideoListState::default()
        };
        set_catalogue(
            &mut state,
            VideoListResponse {
                videos: vec![summary(1), summary(2)],
                total: 12,
                page: 2,
                total_pages: 6,
            },
        );
        assert_eq!(state.videos.len(), 2);
        assert_eq!(state.page, 2);
        assert_eq!(state.total_pages, 6);
        assert!(!state.loading);
    }

    #[test]
    fn detail_load_transitions() {
        let mut state = VideoDetailState::default();
        begin_detail_load(&mut state);
        assert!(state.loading);
        set_detail(&mut state, detail());
        assert!(!state.loading);
        assert_eq!(state.video.as_ref().map(|video| video.id), Some(7));
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_detail_load_records_message() {
        let mut state = VideoDetailState::default();
        begin_detail_load(&mut state);
        fail_detail(&mut state, "Video not found".to_string());
        assert!(!state.loading);
        assert!(state.video.is_none());
        assert_eq!(state.error.as_deref(), Some("Video not found"));
    }

    #[test]
    fn clear_detail_resets_the_slice() {
        let mut state = VideoDetailState::default();
        set_detail(&mut state, detail());
        clear_detail(&mut state);
        assert_eq!(state, VideoDetailState::default());
    }
}
