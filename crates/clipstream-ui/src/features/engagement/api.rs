//! Toggle endpoints for engagement surfaces.
//!
//! # Design
//! - One empty POST per surface; responses carry no payload the client
//!   consumes.
//! - No retries here; reconciliation belongs to the trigger flow.

use crate::features::engagement::state::EngagementKind;
use crate::services::api::ApiClient;
use crate::services::error::ApiError;

/// Dispatch the toggle call for a subject.
pub(crate) async fn dispatch_toggle(
    client: &ApiClient,
    kind: EngagementKind,
    subject_id: u64,
) -> Result<(), ApiError> {
    match kind {
        EngagementKind::Like => client.post_empty(&format!("/videos/{subject_id}/like")).await,
        EngagementKind::Subscribe => {
            client.post_empty(&format!("/subscriptions/{subject_id}")).await
        }
    }
}
