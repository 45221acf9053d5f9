#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Clipstream public API.
//!
//! The backend serves camelCase JSON, so every type here carries
//! `rename_all = "camelCase"`. Viewer-specific fields (`isLiked`,
//! `isSubscribed`) are omitted for anonymous requests and default to
//! `false` on deserialization so list and detail views render the same
//! way for signed-out viewers.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error document returned by the API on validation/runtime failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiProblem {
    /// HTTP status code associated with the error.
    pub status_code: u16,
    /// Human-readable description of the failure.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Short error class name when the backend provides one.
    pub error: Option<String>,
}

/// Public profile for a platform account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Stable numeric account identifier.
    pub id: u64,
    /// Display name shown across the UI.
    pub nickname: String,
    /// Account email address.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Profile image URL when the account has uploaded one.
    pub profile_image: Option<String>,
}

/// Author block embedded in video payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoAuthor {
    /// Stable numeric channel/account identifier.
    pub id: u64,
    /// Channel display name.
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Channel avatar URL when set.
    pub profile_image: Option<String>,
}

/// Compact video view returned when listing the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// Stable numeric video identifier.
    pub id: u64,
    /// Video title.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Thumbnail image URL when one has been generated.
    pub thumbnail_path: Option<String>,
    #[serde(default)]
    /// Total play count across all viewers.
    pub view_count: u64,
    /// Upload timestamp.
    pub created_at: DateTime<Utc>,
    /// Uploading channel.
    pub author: VideoAuthor,
}

/// Full video view returned by the detail endpoint.
///
/// `likeCount`/`subscriberCount` are aggregates across all viewers;
/// `isLiked`/`isSubscribed` describe the requesting viewer and are
/// absent for anonymous requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    /// Stable numeric video identifier.
    pub id: u64,
    /// Video title.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Description text when the uploader provided one.
    pub description: Option<String>,
    /// Playable media URL.
    pub video_path: String,
    #[serde(default)]
    /// Total play count across all viewers.
    pub view_count: u64,
    #[serde(default)]
    /// Aggregate like count across all viewers.
    pub like_count: u64,
    #[serde(default)]
    /// Whether the requesting viewer has liked this video.
    pub is_liked: bool,
    #[serde(default)]
    /// Aggregate subscriber count for the uploading channel.
    pub subscriber_count: u64,
    #[serde(default)]
    /// Whether the requesting viewer subscribes to the channel.
    pub is_subscribed: bool,
    /// Upload timestamp.
    pub created_at: DateTime<Utc>,
    /// Uploading channel.
    pub author: VideoAuthor,
}

impl VideoDetail {
    /// Whether the given viewer owns the uploading channel.
    ///
    /// Used by the presentation layer to hide the subscribe control on
    /// a viewer's own videos.
    #[must_use]
    pub fn is_owned_by(&self, viewer_id: u64) -> bool {
        self.author.id == viewer_id
    }
}

/// Paginated catalogue page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    /// Page of video summaries.
    pub videos: Vec<VideoSummary>,
    /// Total number of videos matching the query.
    pub total: u64,
    /// One-based page index of this response.
    pub page: u32,
    /// Total number of pages available.
    pub total_pages: u32,
}

/// Support inquiry raised by an account (1:1 contact thread).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Stable numeric inquiry identifier.
    pub id: u64,
    /// Inquiry subject line.
    pub title: String,
    /// Inquiry body text.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Staff answer text once one has been posted.
    pub answer: Option<String>,
    /// Whether a staff answer has been posted.
    pub is_answered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Timestamp of the staff answer, when present.
    pub answered_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Account that raised the inquiry.
    pub author: UserProfile,
}

/// Paginated inquiry listing for the signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InquiryListResponse {
    /// Page of inquiries.
    pub inquiries: Vec<Inquiry>,
    /// Total number of inquiries for the account.
    pub total: u64,
    /// One-based page index of this response.
    pub page: u32,
    /// Total number of pages available.
    pub total_pages: u32,
}

/// Body accepted by `POST /inquiries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreateRequest {
    /// Inquiry subject line.
    pub title: String,
    /// Inquiry body text.
    pub content: String,
}

/// Body accepted by `PATCH /inquiries/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InquiryUpdateRequest {
    /// Replacement subject line.
    pub title: String,
    /// Replacement body text.
    pub content: String,
}

/// Account gender selector used during sign-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Wire value used by select controls.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

/// Body accepted by `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Login identifier chosen by the account.
    pub username: String,
    /// Account email address.
    pub email: String,
    /// Plain-text password; hashed server-side.
    pub password: String,
    /// Display name shown across the UI.
    pub nick_name: String,
    /// Birth date in `YYYY-MM-DD` form.
    pub birth_date: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Gender selection.
    pub gender: Gender,
    /// Postal code.
    pub zip_code: String,
    /// Primary address line.
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Secondary address line, when given.
    pub address2: Option<String>,
}

/// Body accepted by `POST /auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    /// Login identifier.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

/// Session established by a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Profile of the signed-in account.
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_detail_defaults_viewer_fields() {
        let payload = r#"{
            "id": 7,
            "title": "Sea otters",
            "videoPath": "/media/7.mp4",
            "likeCount": 12,
            "createdAt": "2026-01-04T09:30:00Z",
            "author": { "id": 3, "nickname": "otterchannel" }
        }"#;
        let detail: VideoDetail = serde_json::from_str(payload).expect("detail should parse");
        assert_eq!(detail.id, 7);
        assert_eq!(detail.like_count, 12);
        assert!(!detail.is_liked);
        assert!(!detail.is_subscribed);
        assert_eq!(detail.subscriber_count, 0);
        assert_eq!(detail.author.nickname, "otterchannel");
        assert!(detail.author.profile_image.is_none());
    }

    #[test]
    fn video_detail_ownership_matches_author() {
        let payload = r#"{
            "id": 7,
            "title": "Sea otters",
            "videoPath": "/media/7.mp4",
            "createdAt": "2026-01-04T09:30:00Z",
            "author": { "id": 3, "nickname": "otterchannel" }
        }"#;
        let detail: VideoDetail = serde_json::from_str(payload).expect("detail should parse");
        assert!(detail.is_owned_by(3));
        assert!(!detail.is_owned_by(4));
    }

    #[test]
    fn sign_up_request_serializes_camel_case() {
        let request = SignUpRequest {
            username: "otterfan".to_string(),
            email: "otter@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            nick_name: "Otter Fan".to_string(),
            birth_date: "1999-12-31".to_string(),
            phone_number: "010-1234-5678".to_string(),
            gender: Gender::Female,
            zip_code: "04524".to_string(),
            address1: "1 Sample St".to_string(),
            address2: None,
        };
        let json = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(json["nickName"], "Otter Fan");
        assert_eq!(json["birthDate"], "1999-12-31");
        assert_eq!(json["gender"], "FEMALE");
        assert!(json.get("address2").is_none());
    }

    #[test]
    fn inquiry_round_trips_answer_fields() {
        let payload = r#"{
            "id": 11,
            "title": "Playback stutters",
            "content": "4k videos stall after a few seconds",
            "answer": "Fixed in the latest rollout",
            "isAnswered": true,
            "answeredAt": "2026-02-01T12:00:00Z",
            "createdAt": "2026-01-28T08:15:00Z",
            "author": {
                "id": 5,
                "nickname": "viewer5",
                "email": "viewer5@example.com"
            }
        }"#;
        let inquiry: Inquiry = serde_json::from_str(payload).expect("inquiry should parse");
        assert!(inquiry.is_answered);
        assert_eq!(inquiry.answer.as_deref(), Some("Fixed in the latest rollout"));
        let json = serde_json::to_value(&inquiry).expect("inquiry should serialize");
        assert_eq!(json["isAnswered"], true);
        assert_eq!(json["author"]["nickname"], "viewer5");
    }

    #[test]
    fn api_problem_parses_backend_error_body() {
        let payload = r#"{ "statusCode": 404, "message": "Video not found", "error": "Not Found" }"#;
        let problem: ApiProblem = serde_json::from_str(payload).expect("problem should parse");
        assert_eq!(problem.status_code, 404);
        assert_eq!(problem.error.as_deref(), Some("Not Found"));
    }
}
