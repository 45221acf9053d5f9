//! API helpers for the video catalogue.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared client for auth and error handling.

use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use clipstream_api_models::{VideoDetail, VideoListResponse};

/// Fetch a catalogue page.
pub(crate) async fn fetch_videos(
    client: &ApiClient,
    page: u32,
    limit: u32,
) -> Result<VideoListResponse, ApiError> {
    client.get_json(&format!("/videos?page={page}&limit={limit}")).await
}

/// Fetch the detail payload for a video.
pub(crate) async fn fetch_video(client: &ApiClient, id: u64) -> Result<VideoDetail, ApiError> {
    client.get_json(&format!("/videos/{id}")).await
}
