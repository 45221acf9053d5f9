//! API helpers for accounts and sessions.

use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use clipstream_api_models::{SessionResponse, SignInRequest, SignUpRequest, UserProfile};

/// Create a new account.
pub(crate) async fn sign_up(
    client: &ApiClient,
    request: &SignUpRequest,
) -> Result<UserProfile, ApiError> {
    client.post_json("/auth/signup", request).await
}

/// Establish a session.
pub(crate) async fn sign_in(
    client: &ApiClient,
    request: &SignInRequest,
) -> Result<SessionResponse, ApiError> {
    client.post_json("/auth/signin", request).await
}

/// Fetch the profile behind the current token.
pub(crate) async fn fetch_me(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get_json("/users/me").await
}
