//! Request/response types for the REST boundary.
//!
//! DESIGN
//! ======
//! The server's auth responses vary in shape (`token` vs `access_token`,
//! optional `user`). They are decoded once here into explicit optional fields
//! and normalized, so the session layer never inspects raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use http::header::AsHeaderName;
use http::{HeaderMap, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request rejected: status {status}")]
    Status { status: StatusCode, body: Value },

    /// The response body did not have the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the server rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// The server-supplied `message` field of a rejected request, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.get("message").and_then(Value::as_str),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// An outbound API call. `path` is relative to the configured base URL.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: HeaderMap::new(), body: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of header `name`, if present and visible ASCII.
    pub fn header(&self, name: impl AsHeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Join `path` onto `base_url`, with exactly one `/` between them.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path.trim_start_matches('/'))
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// A completed HTTP exchange, whatever its status.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Parsed JSON body; `Null` when the body was empty.
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        T::deserialize(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================================
// AUTH PAYLOADS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Registration form fields accepted by `POST /user/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Raw login success body. Servers name the token either `token` or
/// `access_token`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<Value>,
}

/// Normalized login result: the credential and the optional profile.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginGrant {
    pub token: String,
    pub profile: Option<Value>,
}

impl LoginResponse {
    /// Pick the token (`token` first, then `access_token`) and profile.
    ///
    /// Returns `None` when neither token field carries a non-empty value.
    pub fn into_grant(self) -> Option<LoginGrant> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .or(self.access_token.filter(|t| !t.is_empty()))?;
        let profile = self.user.filter(|u| !u.is_null());
        Some(LoginGrant { token, profile })
    }
}
