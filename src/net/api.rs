//! REST client with credential injection and auth-failure handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every API call from the session store and the pages goes through
//! [`ApiClient::request`], which composes two hooks around the transport:
//!
//! 1. `before_send`: attach `authorization: Bearer <token>` when storage holds
//!    a complete credential (see [`read_credential`]).
//! 2. `after_receive`: turn non-2xx responses into [`ApiError::Status`]; on a
//!    401, wipe the session keys from storage and hard-redirect to `/login`
//!    before handing the error back.
//!
//! ERROR HANDLING
//! ==============
//! The 401 side effect never swallows the error: callers still see it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use http::Method;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;

use super::transport::Transport;
use super::types::{ApiError, ApiRequest, ApiResponse};
use crate::router::table::LOGIN_PATH;
use crate::state::session::read_credential;
use crate::util::navigation::Navigator;
use crate::util::storage::{self, KeyValueStore};

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
pub const USER_LOGIN_PATH: &str = "/user/login";
pub const USER_REGISTER_PATH: &str = "/user/register";

/// Endpoint used to log in as an admin (`as_admin`) or a regular user.
pub fn login_endpoint(as_admin: bool) -> &'static str {
    if as_admin { ADMIN_LOGIN_PATH } else { USER_LOGIN_PATH }
}

pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        base_url: impl Into<String>,
        transport: T,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { base_url: base_url.into(), transport, storage, navigator }
    }

    /// Send `request` through both hooks.
    ///
    /// # Errors
    ///
    /// Returns the transport error unchanged, or [`ApiError::Status`] for any
    /// non-2xx response.
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = self.before_send(request);
        let url = request.url(&self.base_url);
        log::debug!("{} {url}", request.method);
        let result = self.transport.send(&url, request).await;
        self.after_receive(result)
    }

    /// Pre-request hook: default headers plus the bearer credential.
    pub fn before_send(&self, mut request: ApiRequest) -> ApiRequest {
        if !request.headers.contains_key(CONTENT_TYPE) {
            request.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        let Some(credential) = read_credential(self.storage.as_ref()) else {
            return request;
        };
        match HeaderValue::from_str(&format!("Bearer {}", credential.token)) {
            Ok(value) => {
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => log::warn!("stored token is not a valid header value; sending without credential"),
        }
        request
    }

    /// Post-response hook: classify the status and handle auth rejection.
    ///
    /// # Errors
    ///
    /// Passes transport errors through; maps non-2xx responses to
    /// [`ApiError::Status`].
    pub fn after_receive(&self, result: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        let response = result?;
        if response.is_success() {
            return Ok(response);
        }
        let err = ApiError::Status { status: response.status, body: response.body };
        if err.is_unauthorized() {
            self.invalidate_session();
        }
        Err(err)
    }

    fn invalidate_session(&self) {
        log::warn!("credential rejected by API; clearing session");
        storage::clear_session_keys(self.storage.as_ref());
        self.navigator.hard_redirect(LOGIN_PATH);
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(ApiRequest::new(Method::GET, path)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized, otherwise
    /// see [`ApiClient::request`].
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(ApiRequest::new(Method::POST, path).with_body(body)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized, otherwise
    /// see [`ApiClient::request`].
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(ApiRequest::new(Method::PUT, path).with_body(body)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(ApiRequest::new(Method::DELETE, path)).await
    }
}
