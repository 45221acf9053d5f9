//! HTTP client over the platform REST API.
//!
//! # Design
//! - One client per app boot, shared through context; auth updates go
//!   through interior mutability instead of rebuilding the client.
//! - Non-2xx responses are decoded into the backend's problem document
//!   when possible so toasts carry its message.

use crate::services::error::{ApiError, classify_status};
use clipstream_api_models::ApiProblem;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;

/// Shared HTTP client for the platform API.
#[derive(Debug)]
pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    /// Create a client rooted at the given base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(None),
        }
    }

    /// Replace the bearer token attached to subsequent requests.
    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn with_auth(&self, mut request: Request) -> Request {
        if let Some(token) = self.token.borrow().as_ref() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        request
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        decode_json(check(response).await?).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .with_auth(Request::post(&self.url(path)))
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        check(response).await.map(|_| ())
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .with_auth(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        decode_json(check(response).await?).await
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .with_auth(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        decode_json(check(response).await?).await
    }

    pub(crate) async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .with_auth(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        check(response).await.map(|_| ())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ApiProblem>().await {
        Ok(problem) => problem.message,
        Err(_) => format!("request failed with status {status}"),
    };
    Err(ApiError::new(classify_status(status), message))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::network(err.to_string()))
}
