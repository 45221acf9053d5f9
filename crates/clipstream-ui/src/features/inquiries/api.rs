//! API helpers for support inquiries.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared client for auth and error handling.

use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use clipstream_api_models::{
    Inquiry, InquiryCreateRequest, InquiryListResponse, InquiryUpdateRequest,
};

/// Fetch a page of the signed-in account's inquiries.
pub(crate) async fn fetch_inquiries(
    client: &ApiClient,
    page: u32,
    limit: u32,
) -> Result<InquiryListResponse, ApiError> {
    client.get_json(&format!("/inquiries?page={page}&limit={limit}")).await
}

/// Create a new inquiry.
pub(crate) async fn create_inquiry(
    client: &ApiClient,
    request: &InquiryCreateRequest,
) -> Result<Inquiry, ApiError> {
    client.post_json("/inquiries", request).await
}

/// Fetch one inquiry with its answer, if any.
pub(crate) async fn fetch_inquiry(client: &ApiClient, id: u64) -> Result<Inquiry, ApiError> {
    client.get_json(&format!("/inquiries/{id}")).await
}

/// Update the title/content of an inquiry.
pub(crate) async fn update_inquiry(
    client: &ApiClient,
    id: u64,
    request: &InquiryUpdateRequest,
) -> Result<Inquiry, ApiError> {
    client.patch_json(&format!("/inquiries/{id}"), request).await
}

/// Delete an inquiry.
pub(crate) async fn delete_inquiry(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete_empty(&format!("/inquiries/{id}")).await
}

/// Delete only the staff answer on an inquiry.
pub(crate) async fn delete_inquiry_answer(client: &ApiClient, id: u64) -> Result<(), ApiError> {
    client.delete_empty(&format!("/inquiries/{id}/answer")).await
}
